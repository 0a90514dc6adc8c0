use std::sync::Arc;

use eskipara_core::lifecycle::ListingLifecycle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Listing reads and admin mutations, over the record store and uploader.
    pub lifecycle: Arc<ListingLifecycle>,
    pub config: Arc<ServerConfig>,
}
