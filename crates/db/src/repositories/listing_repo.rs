//! Repository for the `listings` table.

use async_trait::async_trait;
use eskipara_core::error::CoreError;
use eskipara_core::lifecycle::LISTING_ENTITY;
use eskipara_core::listing::{Listing, ListingFields};
use eskipara_core::photos::PhotoColumn;
use eskipara_core::store::{ListingFilter, ListingStore};
use eskipara_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing::ListingRow;

/// Column list for `listings` queries.
const COLUMNS: &str = "\
    id, category, title, nominal, description, price, \
    image_url, created_at, updated_at";

/// Provides data access for listings.
pub struct ListingRepo;

impl ListingRepo {
    /// Find a listing by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ListingRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = $1");
        sqlx::query_as::<_, ListingRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List listings newest first, optionally restricted to one category.
    ///
    /// A `NULL` limit returns every row.
    pub async fn list(pool: &PgPool, filter: &ListingFilter) -> Result<Vec<ListingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM listings \
             WHERE ($1::TEXT IS NULL OR category = $1) \
             ORDER BY id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, ListingRow>(&query)
            .bind(filter.category.map(|c| c.name()))
            .bind(filter.limit)
            .fetch_all(pool)
            .await
    }

    /// Insert a new listing, returning the created row.
    pub async fn create(
        pool: &PgPool,
        fields: &ListingFields,
        image_url: Option<&str>,
    ) -> Result<ListingRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO listings (category, title, nominal, description, price, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ListingRow>(&query)
            .bind(fields.category.name())
            .bind(&fields.title)
            .bind(&fields.nominal)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// Overwrite the scalar fields and, for [`PhotoColumn::Write`], the photo
    /// column. [`PhotoColumn::Untouched`] omits `image_url` from the statement.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &ListingFields,
        photos: &PhotoColumn,
    ) -> Result<bool, sqlx::Error> {
        let result = match photos {
            PhotoColumn::Untouched => {
                sqlx::query(
                    "UPDATE listings SET \
                         category = $2, title = $3, nominal = $4, \
                         description = $5, price = $6 \
                     WHERE id = $1",
                )
                .bind(id)
                .bind(fields.category.name())
                .bind(&fields.title)
                .bind(&fields.nominal)
                .bind(&fields.description)
                .bind(fields.price)
                .execute(pool)
                .await?
            }
            PhotoColumn::Write(image_url) => {
                sqlx::query(
                    "UPDATE listings SET \
                         category = $2, title = $3, nominal = $4, \
                         description = $5, price = $6, image_url = $7 \
                     WHERE id = $1",
                )
                .bind(id)
                .bind(fields.category.name())
                .bind(&fields.title)
                .bind(&fields.nominal)
                .bind(&fields.description)
                .bind(fields.price)
                .bind(image_url)
                .execute(pool)
                .await?
            }
        };
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a listing by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// ListingStore adapter
// ---------------------------------------------------------------------------

/// [`ListingStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgListingStore {
    pool: PgPool,
}

impl PgListingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Listing store query failed");
    CoreError::Storage(err.to_string())
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: LISTING_ENTITY,
        id,
    }
}

#[async_trait]
impl ListingStore for PgListingStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Listing>, CoreError> {
        ListingRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?
            .map(Listing::try_from)
            .transpose()
    }

    async fn find_all(&self, filter: ListingFilter) -> Result<Vec<Listing>, CoreError> {
        ListingRepo::list(&self.pool, &filter)
            .await
            .map_err(storage_error)?
            .into_iter()
            .map(Listing::try_from)
            .collect()
    }

    async fn insert(
        &self,
        fields: &ListingFields,
        image_url: Option<String>,
    ) -> Result<Listing, CoreError> {
        let row = ListingRepo::create(&self.pool, fields, image_url.as_deref())
            .await
            .map_err(storage_error)?;
        Listing::try_from(row)
    }

    async fn update_by_id(
        &self,
        id: DbId,
        fields: &ListingFields,
        photos: PhotoColumn,
    ) -> Result<(), CoreError> {
        let updated = ListingRepo::update(&self.pool, id, fields, &photos)
            .await
            .map_err(storage_error)?;
        if !updated {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        let deleted = ListingRepo::delete(&self.pool, id)
            .await
            .map_err(storage_error)?;
        if !deleted {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }
}
