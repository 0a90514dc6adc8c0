pub mod admin;
pub mod health;
pub mod listings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /listings                                 list (public, ?category=&limit=)
/// /listings/latest                          home page selection (public)
/// /listings/{id}                            detail with contact link (public)
/// /categories/{slug}/listings               one era (public)
///
/// /admin/login                              login (POST, form)
/// /admin/logout                             logout (POST)
/// /admin/session                            session status
///
/// /admin/listings                           list, create (admin)
/// /admin/listings/{id}                      get, update (POST), delete (DELETE)
/// /admin/listings/{id}/delete               delete (POST form)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(listings::router())
        .nest("/admin", admin::router())
}
