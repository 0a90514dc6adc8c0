//! Multipart parsing for the listing create / edit form.

use axum::extract::Multipart;
use eskipara_core::listing::ListingForm;
use eskipara_core::upload::FilePayload;

use crate::error::AppResult;

/// Name of the repeated photo input.
pub const IMAGES_FIELD: &str = "images";

/// Read the text fields and every `images` part, in submission order.
///
/// Unknown fields are ignored. Empty or text-only `images` parts are kept
/// here and dropped later by the lifecycle controller.
pub async fn read_listing_form(
    mut multipart: Multipart,
) -> AppResult<(ListingForm, Vec<FilePayload>)> {
    let mut form = ListingForm::default();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            IMAGES_FIELD => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                files.push(FilePayload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "category" | "description" | "price" => {
                let text = field.text().await?;
                match name.as_str() {
                    "category" => form.category = text,
                    "description" => form.description = text,
                    _ => form.price = text,
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok((form, files))
}
