//! Session cookie extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use eskipara_core::auth::AuthContext;

use crate::auth::session::{is_admin_token, read_cookie, SESSION_COOKIE};
use crate::state::AppState;

/// The caller's [`AuthContext`], read from the `admin_session` cookie.
///
/// Never rejects: a missing or invalid cookie yields an anonymous context and
/// the lifecycle controller decides what that caller may do.
///
/// ```ignore
/// async fn handler(AdminSession(ctx): AdminSession) -> AppResult<Response> {
///     ctx.require_admin()?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminSession(pub AuthContext);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let is_admin = read_cookie(&parts.headers, SESSION_COOKIE)
            .is_some_and(|token| is_admin_token(token, &state.config.session));

        Ok(AdminSession(if is_admin {
            AuthContext::admin()
        } else {
            AuthContext::anonymous()
        }))
    }
}
