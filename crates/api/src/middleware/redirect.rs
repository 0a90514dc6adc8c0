use axum::body::Body;
use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::LoginRequired;
use crate::state::AppState;

/// Rewrite the `Location` of login redirects produced by
/// [`AppError`](crate::error::AppError) to the configured login path.
pub async fn login_redirect(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if response.extensions().get::<LoginRequired>().is_some() {
        if let Ok(location) = HeaderValue::from_str(&state.config.login_path) {
            response.headers_mut().insert(LOCATION, location);
        }
    }
    response
}
