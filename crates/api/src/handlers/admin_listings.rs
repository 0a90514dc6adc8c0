//! Handlers for the operator's listing management.
//!
//! Form posts answer with `303 See Other` to the admin index. Every handler
//! takes the caller's [`AdminSession`]; anonymous callers are redirected to
//! the login entry point before any upload or write.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use eskipara_core::store::ListingFilter;
use eskipara_core::types::DbId;

use crate::error::AppResult;
use crate::handlers::listing_form::read_listing_form;
use crate::middleware::session::AdminSession;
use crate::response::{see_other, DataResponse, ListingView};
use crate::state::AppState;

/// GET /api/v1/admin/listings
pub async fn list_listings(
    State(state): State<AppState>,
    AdminSession(ctx): AdminSession,
) -> AppResult<Json<DataResponse<Vec<ListingView>>>> {
    ctx.require_admin()?;
    let listings = state.lifecycle.list(ListingFilter::default()).await?;
    Ok(Json(DataResponse {
        data: listings.iter().map(ListingView::from).collect(),
    }))
}

/// GET /api/v1/admin/listings/{id}
///
/// The edit view: current values with the decoded photo list.
pub async fn get_listing(
    State(state): State<AppState>,
    AdminSession(ctx): AdminSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ListingView>>> {
    ctx.require_admin()?;
    let listing = state.lifecycle.get(id).await?;
    Ok(Json(DataResponse {
        data: ListingView::from(&listing),
    }))
}

/// POST /api/v1/admin/listings
///
/// Multipart form: `category`, `description`, `price` and repeated `images`.
pub async fn create_listing(
    State(state): State<AppState>,
    AdminSession(ctx): AdminSession,
    multipart: Multipart,
) -> AppResult<Response> {
    ctx.require_admin()?;
    let (form, files) = read_listing_form(multipart).await?;
    state.lifecycle.create(&ctx, &form, files).await?;
    Ok(see_other(&state.config.admin_index_path, None))
}

/// POST /api/v1/admin/listings/{id}
///
/// Same form as create. New `images` are appended to the existing photos.
pub async fn update_listing(
    State(state): State<AppState>,
    AdminSession(ctx): AdminSession,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    ctx.require_admin()?;
    let (form, files) = read_listing_form(multipart).await?;
    state.lifecycle.update(&ctx, id, &form, files).await?;
    Ok(see_other(&state.config.admin_index_path, None))
}

/// POST /api/v1/admin/listings/{id}/delete
pub async fn delete_listing_form(
    State(state): State<AppState>,
    AdminSession(ctx): AdminSession,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    state.lifecycle.delete(&ctx, id).await?;
    Ok(see_other(&state.config.admin_index_path, None))
}

/// DELETE /api/v1/admin/listings/{id}
pub async fn delete_listing(
    State(state): State<AppState>,
    AdminSession(ctx): AdminSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.lifecycle.delete(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
