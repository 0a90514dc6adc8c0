//! Domain core for the banknote catalogue.
//!
//! Holds the listing model, the photo-list codec and merge rule, the listing
//! lifecycle controller, and the seams ([`store::ListingStore`],
//! [`upload::PhotoUploader`]) that the database and image-host crates
//! implement. Nothing in here performs I/O directly.

pub mod auth;
pub mod contact;
pub mod error;
pub mod lifecycle;
pub mod listing;
pub mod photos;
pub mod store;
pub mod types;
pub mod upload;
