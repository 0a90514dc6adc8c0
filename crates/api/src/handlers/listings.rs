//! Public catalogue reads. No session required.

use axum::extract::{Path, Query, State};
use axum::Json;
use eskipara_core::listing::{Category, Listing};
use eskipara_core::store::ListingFilter;
use eskipara_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, ListingCard, ListingDetail};
use crate::state::AppState;

/// Number of listings on the home page.
pub const LATEST_LISTINGS: i64 = 6;

/// Query parameters for `GET /listings`.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Stored category name or slug, case-insensitive.
    pub category: Option<String>,
    pub limit: Option<i64>,
}

impl ListingQuery {
    fn into_filter(self) -> AppResult<ListingFilter> {
        let category = self
            .category
            .filter(|c| !c.is_empty())
            .map(|c| Category::from_name(&c))
            .transpose()?;

        if let Some(limit) = self.limit {
            if limit < 1 {
                return Err(AppError::BadRequest(format!(
                    "limit must be at least 1, got {limit}"
                )));
            }
        }

        Ok(ListingFilter {
            category,
            limit: self.limit,
        })
    }
}

fn cards(listings: &[Listing], whatsapp_phone: &str) -> Vec<ListingCard> {
    listings
        .iter()
        .map(|listing| ListingCard::new(listing, whatsapp_phone))
        .collect()
}

/// GET /api/v1/listings
///
/// All listings newest first, optionally filtered by `category` and capped
/// by `limit`.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> AppResult<Json<DataResponse<Vec<ListingCard>>>> {
    let listings = state.lifecycle.list(query.into_filter()?).await?;
    Ok(Json(DataResponse {
        data: cards(&listings, &state.config.whatsapp_phone),
    }))
}

/// GET /api/v1/listings/latest
pub async fn latest_listings(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ListingCard>>>> {
    let listings = state
        .lifecycle
        .list(ListingFilter::latest(LATEST_LISTINGS))
        .await?;
    Ok(Json(DataResponse {
        data: cards(&listings, &state.config.whatsapp_phone),
    }))
}

/// GET /api/v1/categories/{slug}/listings
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<ListingCard>>>> {
    let category = Category::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Category '{slug}' not found")))?;

    let listings = state.lifecycle.list(ListingFilter::category(category)).await?;
    Ok(Json(DataResponse {
        data: cards(&listings, &state.config.whatsapp_phone),
    }))
}

/// GET /api/v1/listings/{id}
///
/// One listing with its photos and a pre-filled contact link.
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ListingDetail>>> {
    let listing = state.lifecycle.get(id).await?;
    Ok(Json(DataResponse {
        data: ListingDetail::new(&listing, &state.config.whatsapp_phone),
    }))
}
