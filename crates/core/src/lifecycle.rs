//! Create / update / delete of listings.
//!
//! Every mutating operation takes the request's [`AuthContext`] and refuses
//! before touching the uploader or the store when it is not an admin. Photo
//! uploads happen before the single store write, so a failed upload leaves the
//! record exactly as it was.

use std::sync::Arc;

use crate::auth::AuthContext;
use crate::error::CoreError;
use crate::listing::{Listing, ListingFields, ListingForm};
use crate::photos::PhotoUpdate;
use crate::store::{ListingFilter, ListingStore};
use crate::types::DbId;
use crate::upload::{accepted_files, FilePayload, PhotoUploader};

/// Entity name reported in [`CoreError::NotFound`].
pub const LISTING_ENTITY: &str = "Listing";

pub struct ListingLifecycle {
    store: Arc<dyn ListingStore>,
    uploader: Arc<dyn PhotoUploader>,
}

impl ListingLifecycle {
    pub fn new(store: Arc<dyn ListingStore>, uploader: Arc<dyn PhotoUploader>) -> Self {
        Self { store, uploader }
    }

    pub fn store(&self) -> &Arc<dyn ListingStore> {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Reads (public)
    // -----------------------------------------------------------------------

    pub async fn get(&self, id: DbId) -> Result<Listing, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: LISTING_ENTITY,
                id,
            })
    }

    pub async fn list(&self, filter: ListingFilter) -> Result<Vec<Listing>, CoreError> {
        self.store.find_all(filter).await
    }

    // -----------------------------------------------------------------------
    // Mutations (admin)
    // -----------------------------------------------------------------------

    pub async fn create(
        &self,
        ctx: &AuthContext,
        form: &ListingForm,
        files: Vec<FilePayload>,
    ) -> Result<Listing, CoreError> {
        ctx.require_admin()?;
        let fields = ListingFields::from_form(form)?;

        let uploaded = self.upload_new_photos(files).await?.unwrap_or_default();
        let image_url = PhotoUpdate::Replace(uploaded).resolve(None).into_initial();

        let listing = self.store.insert(&fields, image_url).await?;
        tracing::info!(
            listing_id = listing.id,
            category = %listing.category,
            photo_count = listing.photos().len(),
            "Listing created",
        );
        Ok(listing)
    }

    /// Overwrite a listing's fields and append any newly uploaded photos.
    ///
    /// Submitting no files leaves the stored photo column untouched.
    pub async fn update(
        &self,
        ctx: &AuthContext,
        id: DbId,
        form: &ListingForm,
        files: Vec<FilePayload>,
    ) -> Result<(), CoreError> {
        ctx.require_admin()?;
        let fields = ListingFields::from_form(form)?;
        let existing = self.get(id).await?;

        let update = match self.upload_new_photos(files).await? {
            Some(uploaded) => PhotoUpdate::Append(uploaded),
            None => PhotoUpdate::NoChange,
        };
        let column = update.resolve(existing.image_url.as_deref());

        self.store.update_by_id(id, &fields, column).await?;
        tracing::info!(listing_id = id, category = %fields.category, "Listing updated");
        Ok(())
    }

    /// Hard-delete a listing. A missing id is reported as not found.
    pub async fn delete(&self, ctx: &AuthContext, id: DbId) -> Result<(), CoreError> {
        ctx.require_admin()?;
        self.store.delete_by_id(id).await?;
        tracing::info!(listing_id = id, "Listing deleted");
        Ok(())
    }

    /// Upload the real files among `files`.
    ///
    /// Returns `None` without calling the uploader when nothing real was
    /// submitted.
    async fn upload_new_photos(
        &self,
        files: Vec<FilePayload>,
    ) -> Result<Option<Vec<String>>, CoreError> {
        let accepted = accepted_files(files);
        if accepted.is_empty() {
            return Ok(None);
        }

        let submitted = accepted.len();
        let urls = self.uploader.upload(accepted).await?;
        tracing::debug!(submitted, uploaded = urls.len(), "Photos uploaded");
        Ok(Some(urls))
    }
}
