//! Operator login, logout and session status.

mod common;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, StatusCode};
use common::{body_json, location, test_config, FakeUploader, TestApp, ADMIN_PASSWORD, ADMIN_USERNAME};

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::post("/api/v1/admin/login")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={username}&password={password}")))
        .unwrap()
}

fn set_cookie(response: &axum::http::Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string())
}

#[tokio::test]
async fn successful_login_sets_session_cookie() {
    let app = TestApp::new();
    let response = app.send(login_request(ADMIN_USERNAME, ADMIN_PASSWORD)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    let cookie = set_cookie(&response).expect("login must set a cookie");
    assert!(cookie.starts_with("admin_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=28800"));

    // The issued cookie opens a session.
    let token = cookie.split(';').next().unwrap().to_string();
    let status = app
        .send(
            Request::get("/api/v1/admin/session")
                .header(COOKIE, token)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(body_json(status).await["authenticated"], true);
}

#[tokio::test]
async fn wrong_password_redirects_to_login_without_cookie() {
    let app = TestApp::new();
    let response = app.send(login_request(ADMIN_USERNAME, "yanlis")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn wrong_username_redirects_to_login_without_cookie() {
    let app = TestApp::new();
    let response = app.send(login_request("root", ADMIN_PASSWORD)).await;

    assert_eq!(location(&response), "/admin/login");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn logout_clears_cookie() {
    let app = TestApp::new();
    let response = app
        .send(Request::post("/api/v1/admin/logout").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
    assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn session_status_without_cookie() {
    let app = TestApp::new();
    let json = body_json(app.get("/api/v1/admin/session").await).await;
    assert_eq!(json["authenticated"], false);
}

#[tokio::test]
async fn forged_cookie_is_not_a_session() {
    let app = TestApp::new();
    let response = app
        .send(
            Request::get("/api/v1/admin/session")
                .header(COOKIE, "admin_session=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(body_json(response).await["authenticated"], false);
}

#[tokio::test]
async fn login_redirect_follows_configured_path() {
    let mut config = test_config();
    config.login_path = "/giris".to_string();
    let app = TestApp::with(config, FakeUploader::default());

    let response = app.get("/api/v1/admin/listings").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/giris");
}
