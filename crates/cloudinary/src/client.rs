//! Unsigned image uploads to Cloudinary.
//!
//! One `POST {api_base}/{cloud_name}/image/upload` per file, sent one after
//! another in submission order. The first failure abandons the whole batch.

use std::time::Duration;

use async_trait::async_trait;
use eskipara_core::error::CoreError;
use eskipara_core::upload::{FilePayload, PhotoUploader};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::CloudinaryConfig;

/// HTTP timeout for a single upload call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// File name sent when the browser did not supply one.
const FALLBACK_FILE_NAME: &str = "photo";

/// The part of Cloudinary's upload response we use.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Errors from a single upload call.
#[derive(Debug, thiserror::Error)]
pub enum CloudinaryApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, bad body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Cloudinary answered with a non-2xx status.
    #[error("Cloudinary API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// [`PhotoUploader`] that stores photos on Cloudinary.
pub struct CloudinaryUploader {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryUploader {
    /// Create an uploader with its own HTTP client.
    pub fn new(config: CloudinaryConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Create an uploader reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self { client, config }
    }

    /// Upload one file. `Ok(None)` means Cloudinary accepted it but returned
    /// no `secure_url`.
    async fn upload_one(
        &self,
        url: &str,
        upload_preset: &str,
        file: FilePayload,
    ) -> Result<Option<String>, CloudinaryApiError> {
        let file_name = file
            .file_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

        let mut part = Part::bytes(file.bytes).file_name(file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", upload_preset.to_string());

        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CloudinaryApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<UploadResponse>().await?;
        Ok(parsed.secure_url.filter(|u| !u.is_empty()))
    }
}

#[async_trait]
impl PhotoUploader for CloudinaryUploader {
    async fn upload(&self, files: Vec<FilePayload>) -> Result<Vec<String>, CoreError> {
        let credentials = self.config.credentials()?;
        let url = self.config.upload_url(credentials.cloud_name);

        let mut urls = Vec::with_capacity(files.len());
        for file in files.into_iter().filter(FilePayload::is_real) {
            let file_name = file.file_name.clone().unwrap_or_default();
            let size = file.size();

            match self.upload_one(&url, credentials.upload_preset, file).await {
                Ok(Some(secure_url)) => urls.push(secure_url),
                Ok(None) => {
                    tracing::warn!(
                        file_name = %file_name,
                        size,
                        "Cloudinary response had no secure_url, skipping",
                    );
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        file_name = %file_name,
                        size,
                        "Cloudinary upload error",
                    );
                    return Err(CoreError::UploadFailed(e.to_string()));
                }
            }
        }

        tracing::debug!(uploaded = urls.len(), "Cloudinary batch complete");
        Ok(urls)
    }
}
