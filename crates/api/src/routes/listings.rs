//! Public catalogue routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::listings;
use crate::state::AppState;

/// ```text
/// GET /listings                      -> list_listings
/// GET /listings/latest               -> latest_listings
/// GET /listings/{id}                 -> get_listing
/// GET /categories/{slug}/listings    -> list_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/listings", get(listings::list_listings))
        .route("/listings/latest", get(listings::latest_listings))
        .route("/listings/{id}", get(listings::get_listing))
        .route("/categories/{slug}/listings", get(listings::list_by_category))
}
