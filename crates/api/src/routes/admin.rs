//! Operator routes mounted at `/admin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin_listings, auth};
use crate::state::AppState;

/// ```text
/// POST   /login                  -> login
/// POST   /logout                 -> logout
/// GET    /session                -> session_status
/// GET    /listings               -> list_listings
/// POST   /listings               -> create_listing
/// GET    /listings/{id}          -> get_listing
/// POST   /listings/{id}          -> update_listing
/// DELETE /listings/{id}          -> delete_listing
/// POST   /listings/{id}/delete   -> delete_listing_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session_status))
        .route(
            "/listings",
            get(admin_listings::list_listings).post(admin_listings::create_listing),
        )
        .route(
            "/listings/{id}",
            get(admin_listings::get_listing)
                .post(admin_listings::update_listing)
                .delete(admin_listings::delete_listing),
        )
        .route(
            "/listings/{id}/delete",
            post(admin_listings::delete_listing_form),
        )
}
