pub mod admin_listings;
pub mod auth;
pub mod listing_form;
pub mod listings;
