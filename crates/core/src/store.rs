//! Record store seam for listings.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::listing::{Category, Listing, ListingFields};
use crate::photos::PhotoColumn;
use crate::types::DbId;

/// Selection for [`ListingStore::find_all`]. Results are always newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub category: Option<Category>,
    pub limit: Option<i64>,
}

impl ListingFilter {
    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            limit: None,
        }
    }

    pub fn latest(limit: i64) -> Self {
        Self {
            category: None,
            limit: Some(limit),
        }
    }
}

/// Persistence for [`Listing`] records keyed by integer id.
///
/// `update_by_id` and `delete_by_id` report [`CoreError::NotFound`] when no
/// row has the given id. Each call touches exactly one row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Listing>, CoreError>;

    async fn find_all(&self, filter: ListingFilter) -> Result<Vec<Listing>, CoreError>;

    async fn insert(
        &self,
        fields: &ListingFields,
        image_url: Option<String>,
    ) -> Result<Listing, CoreError>;

    /// Overwrite the scalar fields; the photo column is written only for
    /// [`PhotoColumn::Write`].
    async fn update_by_id(
        &self,
        id: DbId,
        fields: &ListingFields,
        photos: PhotoColumn,
    ) -> Result<(), CoreError>;

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError>;

    /// Connectivity check for health reporting.
    async fn ping(&self) -> Result<(), CoreError>;
}
