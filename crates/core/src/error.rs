use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Photo upload credentials are missing from the environment.
    #[error("Upload not configured: {0}")]
    UploadConfiguration(String),

    /// The image host rejected an upload or could not be reached.
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// The record store failed for a reason unrelated to the request.
    #[error("Storage error: {0}")]
    Storage(String),
}
