#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use eskipara_api::auth::password::{hash_password, AdminCredentials};
use eskipara_api::auth::session::{issue_token, SessionConfig, SESSION_COOKIE};
use eskipara_api::config::{ServerConfig, DEFAULT_ADMIN_INDEX_PATH, DEFAULT_LOGIN_PATH};
use eskipara_api::router::build_app_router;
use eskipara_api::state::AppState;
use eskipara_core::error::CoreError;
use eskipara_core::lifecycle::{ListingLifecycle, LISTING_ENTITY};
use eskipara_core::listing::{Category, Listing, ListingFields, NOMINAL_PLACEHOLDER};
use eskipara_core::photos::PhotoColumn;
use eskipara_core::store::{ListingFilter, ListingStore};
use eskipara_core::types::DbId;
use eskipara_core::upload::{FilePayload, PhotoUploader};

pub const ADMIN_USERNAME: &str = "operator";
pub const ADMIN_PASSWORD: &str = "eski-para-1923";
pub const WHATSAPP_PHONE: &str = "905551112233";

// ---------------------------------------------------------------------------
// In-memory record store
// ---------------------------------------------------------------------------

/// [`ListingStore`] over a `Vec`, counting every write.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<Listing>>,
    next_id: AtomicI64,
    writes: AtomicUsize,
}

impl InMemoryStore {
    /// Insert a row directly, bypassing the write counter.
    pub fn seed(&self, category: Category, title: &str, price: f64, image_url: Option<&str>) -> Listing {
        let now = chrono::Utc::now();
        let listing = Listing {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            category,
            title: title.to_string(),
            nominal: NOMINAL_PLACEHOLDER.to_string(),
            description: Some(title.to_string()),
            price,
            image_url: image_url.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(listing.clone());
        listing
    }

    pub fn row(&self, id: DbId) -> Option<Listing> {
        self.rows.lock().unwrap().iter().find(|l| l.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingStore for InMemoryStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Listing>, CoreError> {
        Ok(self.row(id))
    }

    async fn find_all(&self, filter: ListingFilter) -> Result<Vec<Listing>, CoreError> {
        let mut rows: Vec<Listing> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|l| filter.category.map_or(true, |c| l.category == c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        if let Some(limit) = filter.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn insert(
        &self,
        fields: &ListingFields,
        image_url: Option<String>,
    ) -> Result<Listing, CoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let now = chrono::Utc::now();
        let listing = Listing {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            category: fields.category,
            title: fields.title.clone(),
            nominal: fields.nominal.clone(),
            description: fields.description.clone(),
            price: fields.price,
            image_url,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(listing.clone());
        Ok(listing)
    }

    async fn update_by_id(
        &self,
        id: DbId,
        fields: &ListingFields,
        photos: PhotoColumn,
    ) -> Result<(), CoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|l| l.id == id).ok_or(CoreError::NotFound {
            entity: LISTING_ENTITY,
            id,
        })?;
        row.category = fields.category;
        row.title = fields.title.clone();
        row.nominal = fields.nominal.clone();
        row.description = fields.description.clone();
        row.price = fields.price;
        if let PhotoColumn::Write(value) = photos {
            row.image_url = value;
        }
        row.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| l.id != id);
        if rows.len() == before {
            return Err(CoreError::NotFound {
                entity: LISTING_ENTITY,
                id,
            });
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fake image host
// ---------------------------------------------------------------------------

/// Returns `https://cdn.test/{file_name}` per file, or fails every batch.
#[derive(Default)]
pub struct FakeUploader {
    received: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeUploader {
    pub fn failing() -> Self {
        Self {
            received: Mutex::default(),
            fail: true,
        }
    }

    /// File names of every file received, across all calls.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoUploader for FakeUploader {
    async fn upload(&self, files: Vec<FilePayload>) -> Result<Vec<String>, CoreError> {
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name.clone().unwrap_or_default())
            .collect();
        self.received.lock().unwrap().extend(names.iter().cloned());

        if self.fail {
            return Err(CoreError::UploadFailed("400: Invalid image file".into()));
        }
        Ok(names
            .iter()
            .map(|n| format!("https://cdn.test/{n}"))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with a known operator account and secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 25 * 1024 * 1024,
        session: SessionConfig {
            secret: "test-session-secret-long-enough-for-hmac".to_string(),
            ttl_secs: 28_800,
        },
        admin: AdminCredentials {
            username: ADMIN_USERNAME.to_string(),
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
        },
        whatsapp_phone: WHATSAPP_PHONE.to_string(),
        login_path: DEFAULT_LOGIN_PATH.to_string(),
        admin_index_path: DEFAULT_ADMIN_INDEX_PATH.to_string(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub uploader: Arc<FakeUploader>,
    pub config: ServerConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(test_config(), FakeUploader::default())
    }

    pub fn with_failing_uploads() -> Self {
        Self::with(test_config(), FakeUploader::failing())
    }

    pub fn with(config: ServerConfig, uploader: FakeUploader) -> Self {
        let store = Arc::new(InMemoryStore::default());
        let uploader = Arc::new(uploader);
        let lifecycle = ListingLifecycle::new(store.clone(), uploader.clone());
        let state = AppState {
            lifecycle: Arc::new(lifecycle),
            config: Arc::new(config.clone()),
        };

        Self {
            router: build_app_router(state),
            store,
            uploader,
            config,
        }
    }

    /// `Cookie` header value for a valid admin session.
    pub fn admin_cookie(&self) -> String {
        let token = issue_token(&self.config.session).unwrap();
        format!("{SESSION_COOKIE}={token}")
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn admin_get(&self, uri: &str) -> Response<Body> {
        let request = Request::get(uri)
            .header(COOKIE, self.admin_cookie())
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a multipart form, with the admin cookie when `as_admin`.
    pub async fn post_form(
        &self,
        uri: &str,
        form: MultipartForm,
        as_admin: bool,
    ) -> Response<Body> {
        let (content_type, body) = form.build();
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, content_type);
        if as_admin {
            builder = builder.header(COOKIE, self.admin_cookie());
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    pub async fn request_as_admin(&self, method: Method, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(COOKIE, self.admin_cookie())
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }
}

// ---------------------------------------------------------------------------
// Request / response helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "eskipara-test-boundary";

/// Minimal `multipart/form-data` body builder.
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard listing fields.
    pub fn listing(category: &str, description: &str, price: &str) -> Self {
        Self::new()
            .text("category", category)
            .text("description", description)
            .text("price", price)
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// A photo part with some bytes.
    pub fn photo(self, file_name: &str) -> Self {
        self.file("images", file_name, &[0xFF, 0xD8, 0xFF, 0xE0])
    }

    pub fn build(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={BOUNDARY}"),
            self.body,
        )
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
