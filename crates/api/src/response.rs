//! Response shapes shared by the handlers.
//!
//! JSON responses use a `{ "data": ... }` envelope. Listings are never sent
//! raw: [`ListingView`] decodes the photo column and adds display fields.

use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Redirect, Response};
use eskipara_core::contact::{
    build_contact_link, card_inquiry_message, format_price_tr, inquiry_message,
};
use eskipara_core::listing::{Category, Listing};
use eskipara_core::types::{DbId, Price, Timestamp};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A listing as shown in catalogue grids and the admin table.
#[derive(Debug, Serialize)]
pub struct ListingView {
    pub id: DbId,
    pub category: Category,
    pub category_label: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub price: Price,
    /// Price formatted for display, without currency.
    pub price_display: String,
    pub photos: Vec<String>,
    pub cover_photo: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Listing> for ListingView {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id,
            category: listing.category,
            category_label: listing.category.label(),
            title: listing.title.clone(),
            description: listing.description.clone(),
            price: listing.price,
            price_display: format_price_tr(listing.price),
            cover_photo: listing.cover_photo(),
            photos: listing.photos(),
            created_at: listing.created_at,
        }
    }
}

/// A public catalogue card: the listing plus the card's contact link.
#[derive(Debug, Serialize)]
pub struct ListingCard {
    #[serde(flatten)]
    pub listing: ListingView,
    pub contact_link: String,
}

impl ListingCard {
    pub fn new(listing: &Listing, whatsapp_phone: &str) -> Self {
        Self {
            listing: ListingView::from(listing),
            contact_link: build_contact_link(whatsapp_phone, &card_inquiry_message(listing)),
        }
    }
}

/// The public detail page: the listing plus a pre-filled contact link.
#[derive(Debug, Serialize)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: ListingView,
    pub nominal: String,
    pub contact_link: String,
}

impl ListingDetail {
    pub fn new(listing: &Listing, whatsapp_phone: &str) -> Self {
        Self {
            listing: ListingView::from(listing),
            nominal: listing.nominal.clone(),
            contact_link: build_contact_link(whatsapp_phone, &inquiry_message(listing)),
        }
    }
}

/// `303 See Other` to `location`, optionally setting a cookie.
pub fn see_other(location: &str, set_cookie: Option<String>) -> Response {
    let mut response = Redirect::to(location).into_response();
    if let Some(cookie) = set_cookie.and_then(|c| HeaderValue::from_str(&c).ok()) {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}
