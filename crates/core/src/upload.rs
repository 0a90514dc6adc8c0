//! Photo upload gateway seam.
//!
//! The concrete image host lives in its own crate; the lifecycle controller
//! only sees [`PhotoUploader`].

use async_trait::async_trait;

use crate::error::CoreError;

/// One submitted form part from the photo input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    /// `None` when the part was a plain text value rather than a file.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            content_type,
            bytes,
        }
    }

    /// A real upload: a file part with at least one byte. Browsers submit an
    /// empty, zero-byte part when the file input is left blank.
    pub fn is_real(&self) -> bool {
        self.file_name.is_some() && !self.bytes.is_empty()
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Keep only real uploads, in submission order.
pub fn accepted_files(files: Vec<FilePayload>) -> Vec<FilePayload> {
    files.into_iter().filter(FilePayload::is_real).collect()
}

/// Uploads photos to a third-party host and returns their permanent URLs.
///
/// Implementations receive only accepted files (see [`accepted_files`]) and
/// must either return URLs in input order (skipping files the host accepted
/// without a URL) or fail the whole batch. Partial results are never
/// returned on failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoUploader: Send + Sync {
    async fn upload(&self, files: Vec<FilePayload>) -> Result<Vec<String>, CoreError>;
}
