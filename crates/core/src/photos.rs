//! Photo-list storage codec and the append-only merge rule.
//!
//! A listing's photos live in one nullable text column (`image_url`). Rows
//! written before galleries existed hold a single bare URL; newer rows hold a
//! JSON array of URLs. There was never a migration between the two, so every
//! read goes through [`StoredPhotoField::parse`], which classifies the raw
//! value once and never fails.

use serde_json::Value;

/// A legacy (pre-JSON) value is only trusted when it starts with this prefix.
const LEGACY_URL_PREFIX: &str = "http";

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// The three shapes the photo column can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredPhotoField {
    /// NULL, empty, or anything unusable.
    Empty,
    /// A single URL written before the column held JSON.
    LegacyUrl(String),
    /// A JSON array; only its string elements are kept, in order.
    UrlList(Vec<String>),
}

impl StoredPhotoField {
    /// Classify a raw column value.
    ///
    /// - `None` / `""` -> [`Empty`](Self::Empty)
    /// - JSON array -> [`UrlList`](Self::UrlList) with non-string elements dropped
    /// - any other valid JSON (number, object, string literal, `null`) -> `Empty`
    /// - malformed JSON starting with `http` -> [`LegacyUrl`](Self::LegacyUrl)
    /// - anything else -> `Empty`
    ///
    /// An array that `serde_json` rejects as a whole, such as one holding an
    /// out-of-range number (`1e400`) or a lone surrogate escape, is malformed
    /// JSON and decodes to `Empty` with none of its strings kept.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            return Self::Empty;
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => Self::UrlList(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(url) => Some(url),
                        _ => None,
                    })
                    .collect(),
            ),
            Ok(_) => Self::Empty,
            Err(_) if raw.starts_with(LEGACY_URL_PREFIX) => Self::LegacyUrl(raw.to_string()),
            Err(_) => Self::Empty,
        }
    }

    /// Flatten into the ordered URL list callers work with.
    pub fn into_urls(self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::LegacyUrl(url) => vec![url],
            Self::UrlList(urls) => urls,
        }
    }
}

/// Decode a stored photo column into its ordered URL list. Never fails.
pub fn decode(raw: Option<&str>) -> Vec<String> {
    StoredPhotoField::parse(raw).into_urls()
}

/// Encode a URL list for storage.
///
/// An empty list encodes to `None` so the column stays NULL rather than
/// holding `"[]"`.
pub fn encode(urls: &[String]) -> Option<String> {
    if urls.is_empty() {
        return None;
    }
    let array = Value::Array(urls.iter().cloned().map(Value::String).collect());
    Some(array.to_string())
}

// ---------------------------------------------------------------------------
// Merge rule
// ---------------------------------------------------------------------------

/// How a write should treat the photo column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoUpdate {
    /// Overwrite with exactly these URLs (new listings only).
    Replace(Vec<String>),
    /// Keep the stored URLs and append these after them.
    Append(Vec<String>),
    /// No new files were submitted; the column must not be touched.
    NoChange,
}

/// The resolved effect of a [`PhotoUpdate`] on the stored column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoColumn {
    /// Leave the stored value exactly as it is. No write.
    Untouched,
    /// Write this value (`None` writes NULL).
    Write(Option<String>),
}

impl PhotoColumn {
    /// The value a fresh row should start with; `Untouched` means NULL.
    pub fn into_initial(self) -> Option<String> {
        match self {
            Self::Untouched => None,
            Self::Write(value) => value,
        }
    }
}

impl PhotoUpdate {
    /// Resolve against the currently stored raw value.
    ///
    /// `Append` keeps existing URLs first and adds the new ones in upload
    /// order, without de-duplication. When the merged list is empty the
    /// column is left as stored.
    pub fn resolve(self, existing_raw: Option<&str>) -> PhotoColumn {
        match self {
            Self::NoChange => PhotoColumn::Untouched,
            Self::Replace(urls) => PhotoColumn::Write(encode(&urls)),
            Self::Append(uploaded) => {
                let mut merged = decode(existing_raw);
                merged.extend(uploaded);
                if merged.is_empty() {
                    return PhotoColumn::Untouched;
                }
                PhotoColumn::Write(encode(&merged))
            }
        }
    }
}
