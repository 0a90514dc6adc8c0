//! Handlers for the operator session (login, logout, status).

use axum::extract::State;
use axum::response::Response;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::auth::session::{cleared_session_cookie, issue_token, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::session::AdminSession;
use crate::response::see_other;
use crate::state::AppState;

/// Form body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// POST /api/v1/admin/login
///
/// On success sets the session cookie and redirects to the admin index;
/// otherwise redirects back to the login entry point without a cookie.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let valid = state
        .config
        .admin
        .verify(&input.username, &input.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !valid {
        tracing::warn!(username = %input.username, "Failed admin login");
        return Ok(see_other(&state.config.login_path, None));
    }

    let token = issue_token(&state.config.session)
        .map_err(|e| AppError::InternalError(format!("Session token error: {e}")))?;
    tracing::info!("Admin logged in");

    Ok(see_other(
        &state.config.admin_index_path,
        Some(session_cookie(&token, &state.config.session)),
    ))
}

/// POST /api/v1/admin/logout
pub async fn logout(State(state): State<AppState>) -> Response {
    see_other(&state.config.login_path, Some(cleared_session_cookie()))
}

/// GET /api/v1/admin/session
pub async fn session_status(AdminSession(ctx): AdminSession) -> Json<SessionStatus> {
    Json(SessionStatus {
        authenticated: ctx.is_admin,
    })
}
