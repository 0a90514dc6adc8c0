//! Row model for the `listings` table.

use eskipara_core::error::CoreError;
use eskipara_core::listing::{Category, Listing};
use eskipara_core::types::{DbId, Price, Timestamp};
use sqlx::FromRow;

/// A row from the `listings` table, before the category text is checked.
#[derive(Debug, Clone, FromRow)]
pub struct ListingRow {
    pub id: DbId,
    pub category: String,
    pub title: String,
    pub nominal: String,
    pub description: Option<String>,
    pub price: Price,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ListingRow> for Listing {
    type Error = CoreError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let category = Category::from_name(&row.category).map_err(|_| {
            CoreError::Storage(format!(
                "listing {} has unknown category '{}'",
                row.id, row.category
            ))
        })?;

        Ok(Listing {
            id: row.id,
            category,
            title: row.title,
            nominal: row.nominal,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
