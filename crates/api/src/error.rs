use axum::extract::multipart::MultipartError;
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use eskipara_core::error::CoreError;
use serde_json::json;

use crate::config::DEFAULT_LOGIN_PATH;

/// Message shown to the operator when the image host rejects an upload.
pub const UPLOAD_FAILED_MESSAGE: &str = "Fotoğraf yüklenirken bir hata oluştu.";

/// Response extension marking a redirect to the login entry point.
///
/// The error response carries [`DEFAULT_LOGIN_PATH`]; the
/// [`login_redirect`](crate::middleware::login_redirect) layer swaps in the
/// configured path.
#[derive(Debug, Clone, Copy)]
pub struct LoginRequired;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses,
/// except for [`CoreError::Unauthorized`], which becomes a `303 See Other`
/// to the login entry point.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `eskipara_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A route parameter that names nothing, e.g. an unknown category slug.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The listing form body could not be read. Carries its own status:
    /// `413` past the body limit, `400` for a malformed body.
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    tracing::debug!(reason = %msg, "Redirecting to login");
                    return login_redirect_response();
                }
                CoreError::UploadConfiguration(msg) => {
                    tracing::error!(error = %msg, "Photo upload is not configured");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPLOAD_NOT_CONFIGURED",
                        "Photo upload is not configured".to_string(),
                    )
                }
                CoreError::UploadFailed(msg) => {
                    tracing::error!(error = %msg, "Photo upload failed");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPLOAD_FAILED",
                        UPLOAD_FAILED_MESSAGE.to_string(),
                    )
                }
                CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Multipart(err) => {
                let status = err.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "BAD_REQUEST"
                };
                tracing::debug!(error = %err, %status, "Rejected listing form body");
                (status, code, err.body_text())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn login_redirect_response() -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();
    response
        .headers_mut()
        .insert(LOCATION, HeaderValue::from_static(DEFAULT_LOGIN_PATH));
    response.extensions_mut().insert(LoginRequired);
    response
}
