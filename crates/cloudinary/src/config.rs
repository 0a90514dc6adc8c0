use eskipara_core::error::CoreError;

/// Default Cloudinary REST base; the cloud name is appended per request.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Unsigned-upload settings for a Cloudinary account.
///
/// Both credentials are optional at load time so the server can start (and
/// serve the catalogue) without them; uploading without them fails with
/// [`CoreError::UploadConfiguration`].
#[derive(Debug, Clone, Default)]
pub struct CloudinaryConfig {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
    pub api_base: String,
}

/// Credentials checked to be present and non-empty.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub cloud_name: &'a str,
    pub upload_preset: &'a str,
}

impl CloudinaryConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Default                            |
    /// |----------------------------|------------------------------------|
    /// | `CLOUDINARY_CLOUD_NAME`    | --                                 |
    /// | `CLOUDINARY_UPLOAD_PRESET` | --                                 |
    /// | `CLOUDINARY_API_BASE`      | `https://api.cloudinary.com/v1_1`  |
    pub fn from_env() -> Self {
        Self {
            cloud_name: non_empty_var("CLOUDINARY_CLOUD_NAME"),
            upload_preset: non_empty_var("CLOUDINARY_UPLOAD_PRESET"),
            api_base: non_empty_var("CLOUDINARY_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    /// Both credentials, or an upload configuration error naming what is
    /// missing.
    pub fn credentials(&self) -> Result<Credentials<'_>, CoreError> {
        match (self.cloud_name.as_deref(), self.upload_preset.as_deref()) {
            (Some(cloud_name), Some(upload_preset))
                if !cloud_name.is_empty() && !upload_preset.is_empty() =>
            {
                Ok(Credentials {
                    cloud_name,
                    upload_preset,
                })
            }
            _ => Err(CoreError::UploadConfiguration(
                "CLOUDINARY_CLOUD_NAME and CLOUDINARY_UPLOAD_PRESET must both be set".into(),
            )),
        }
    }

    /// `POST` target for an image upload.
    pub fn upload_url(&self, cloud_name: &str) -> String {
        format!(
            "{}/{cloud_name}/image/upload",
            self.api_base.trim_end_matches('/')
        )
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
