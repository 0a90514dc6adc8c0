/// Listing ids are PostgreSQL BIGSERIAL values assigned by the store.
pub type DbId = i64;

/// Creation and modification times, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Asking price in Turkish lira. Stored as `DOUBLE PRECISION`.
pub type Price = f64;
