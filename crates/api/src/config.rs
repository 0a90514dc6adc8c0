use crate::auth::password::AdminCredentials;
use crate::auth::session::SessionConfig;

/// Where an unauthenticated admin request is sent.
pub const DEFAULT_LOGIN_PATH: &str = "/admin/login";

/// Where successful admin form posts land.
pub const DEFAULT_ADMIN_INDEX_PATH: &str = "/admin";

/// Default request body limit for photo uploads: 25 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// Network and path settings have defaults suitable for local development;
/// the session secret and operator account must always be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
    /// Session cookie signing settings.
    pub session: SessionConfig,
    /// The operator account.
    pub admin: AdminCredentials,
    /// Phone number for contact links, digits only with country code.
    pub whatsapp_phone: String,
    pub login_path: String,
    pub admin_index_path: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `26214400`                 |
    /// | `WHATSAPP_PHONE`       | empty (logged as warning)  |
    /// | `LOGIN_PATH`           | `/admin/login`             |
    /// | `ADMIN_INDEX_PATH`     | `/admin`                   |
    ///
    /// Session and operator settings are read by [`SessionConfig::from_env`]
    /// and [`AdminCredentials::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let whatsapp_phone = std::env::var("WHATSAPP_PHONE").unwrap_or_default();
        if whatsapp_phone.is_empty() {
            tracing::warn!("WHATSAPP_PHONE is not set; contact links will have no number");
        }

        let login_path = std::env::var("LOGIN_PATH").unwrap_or_else(|_| DEFAULT_LOGIN_PATH.into());
        let admin_index_path =
            std::env::var("ADMIN_INDEX_PATH").unwrap_or_else(|_| DEFAULT_ADMIN_INDEX_PATH.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            session: SessionConfig::from_env(),
            admin: AdminCredentials::from_env(),
            whatsapp_phone,
            login_path,
            admin_index_path,
        }
    }
}
