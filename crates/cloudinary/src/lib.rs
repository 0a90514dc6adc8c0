//! Cloudinary image host client.
//!
//! Implements [`eskipara_core::upload::PhotoUploader`] with Cloudinary's
//! unsigned upload API.

pub mod client;
pub mod config;

pub use client::CloudinaryUploader;
pub use config::CloudinaryConfig;
