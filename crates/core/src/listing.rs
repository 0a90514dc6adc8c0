//! Listing entity, era categories, and the field rules shared by create and
//! update.
//!
//! Operator input arrives as raw form strings ([`ListingForm`]) and is turned
//! into a validated [`ListingFields`] before anything is uploaded or stored.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::photos;
use crate::types::{DbId, Price, Timestamp};

/// Titles are cut to this many characters (no ellipsis).
pub const TITLE_MAX_CHARS: usize = 80;

/// Title used when the description is blank.
pub const UNTITLED_PLACEHOLDER: &str = "Açıklamasız para";

/// Value written to the legacy `nominal` column on every save.
pub const NOMINAL_PLACEHOLDER: &str = "Belirtilmemiş";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Historical era a banknote belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Republic era (1923 onwards).
    Cumhuriyet,
    /// Ottoman era.
    Osmanli,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Cumhuriyet, Category::Osmanli];

    /// Parse the stored name (`CUMHURIYET` / `OSMANLI`) or the URL slug,
    /// ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown category '{name}'. Must be one of: CUMHURIYET, OSMANLI"
                ))
            })
    }

    /// Parse a URL slug (`cumhuriyet` / `osmanli`). Returns `None` for
    /// anything else.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Database name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cumhuriyet => "CUMHURIYET",
            Self::Osmanli => "OSMANLI",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cumhuriyet => "Cumhuriyet",
            Self::Osmanli => "Osmanlı",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Cumhuriyet => "cumhuriyet",
            Self::Osmanli => "osmanli",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A banknote listing as held by the record store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: DbId,
    pub category: Category,
    pub title: String,
    pub nominal: String,
    pub description: Option<String>,
    pub price: Price,
    /// Raw photo column; read it through [`Listing::photos`].
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Listing {
    /// Decoded photo URLs, cover photo first.
    pub fn photos(&self) -> Vec<String> {
        photos::decode(self.image_url.as_deref())
    }

    pub fn cover_photo(&self) -> Option<String> {
        self.photos().into_iter().next()
    }
}

// ---------------------------------------------------------------------------
// Operator input
// ---------------------------------------------------------------------------

/// Raw text fields from the create / edit form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
}

/// Validated, derived column values written on every create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFields {
    pub category: Category,
    pub title: String,
    pub nominal: String,
    pub description: Option<String>,
    pub price: Price,
}

impl ListingFields {
    /// Validate a form and derive title / nominal.
    ///
    /// The description is stored as typed (untrimmed); only an empty string
    /// becomes NULL.
    pub fn from_form(form: &ListingForm) -> Result<Self, CoreError> {
        let category = Category::from_name(&form.category)?;
        let price = parse_price(&form.price)?;

        Ok(Self {
            category,
            title: derive_title(&form.description),
            nominal: NOMINAL_PLACEHOLDER.to_string(),
            description: (!form.description.is_empty()).then(|| form.description.clone()),
            price,
        })
    }
}

/// Derive a listing title from its description.
///
/// The trimmed description cut to [`TITLE_MAX_CHARS`] characters, or
/// [`UNTITLED_PLACEHOLDER`] when nothing is left after trimming.
pub fn derive_title(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return UNTITLED_PLACEHOLDER.to_string();
    }
    trimmed.chars().take(TITLE_MAX_CHARS).collect()
}

/// Parse the submitted price text.
///
/// Blank, non-numeric and non-finite input is rejected instead of being
/// coerced to zero.
pub fn parse_price(raw: &str) -> Result<Price, CoreError> {
    let raw = raw.trim();
    raw.parse::<Price>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| CoreError::Validation(format!("Price must be a number, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn form(category: &str, description: &str, price: &str) -> ListingForm {
        ListingForm {
            category: category.into(),
            description: description.into(),
            price: price.into(),
        }
    }

    #[test]
    fn category_round_trips_names_and_slugs() {
        for c in Category::ALL {
            assert_eq!(Category::from_name(c.name()).unwrap(), c);
            assert_eq!(Category::from_name(c.slug()).unwrap(), c);
            assert_eq!(Category::from_slug(c.slug()), Some(c));
        }
        assert_eq!(Category::Osmanli.label(), "Osmanlı");
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert_matches!(Category::from_name(""), Err(CoreError::Validation(_)));
        assert_matches!(Category::from_name("BIZANS"), Err(CoreError::Validation(_)));
        assert_eq!(Category::from_slug("CUMHURIYET"), None);
    }

    #[test]
    fn category_serializes_as_stored_name() {
        let json = serde_json::to_string(&Category::Cumhuriyet).unwrap();
        assert_eq!(json, r#""CUMHURIYET""#);
    }

    #[test]
    fn blank_description_uses_placeholder_title() {
        assert_eq!(derive_title(""), UNTITLED_PLACEHOLDER);
        assert_eq!(derive_title("  "), UNTITLED_PLACEHOLDER);
        assert_eq!(derive_title("\n\t "), UNTITLED_PLACEHOLDER);
    }

    #[test]
    fn long_description_is_cut_to_80_chars_without_ellipsis() {
        let description = "x".repeat(200);
        let title = derive_title(&description);
        assert_eq!(title, "x".repeat(80));
        assert!(!title.ends_with('…'));
    }

    #[test]
    fn title_is_cut_on_characters_not_bytes() {
        let description = "ş".repeat(100);
        assert_eq!(derive_title(&description).chars().count(), 80);
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(derive_title("  1927 issue  "), "1927 issue");
    }

    #[test]
    fn price_parses_numbers() {
        assert_eq!(parse_price("12500").unwrap(), 12500.0);
        assert_eq!(parse_price(" 99.5 ").unwrap(), 99.5);
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn invalid_price_is_rejected() {
        for raw in ["", "abc", "NaN", "inf", "12,5"] {
            assert_matches!(parse_price(raw), Err(CoreError::Validation(_)), "{raw:?}");
        }
    }

    #[test]
    fn fields_from_form() {
        let fields =
            ListingFields::from_form(&form("CUMHURIYET", "1927 issue, fine condition", "12500"))
                .unwrap();
        assert_eq!(fields.category, Category::Cumhuriyet);
        assert_eq!(fields.title, "1927 issue, fine condition");
        assert_eq!(fields.nominal, NOMINAL_PLACEHOLDER);
        assert_eq!(fields.description.as_deref(), Some("1927 issue, fine condition"));
        assert_eq!(fields.price, 12500.0);
    }

    #[test]
    fn empty_description_is_stored_as_null() {
        let fields = ListingFields::from_form(&form("OSMANLI", "", "10")).unwrap();
        assert_eq!(fields.description, None);
        assert_eq!(fields.title, UNTITLED_PLACEHOLDER);
    }

    #[test]
    fn whitespace_description_is_kept_verbatim() {
        let fields = ListingFields::from_form(&form("OSMANLI", "  ", "10")).unwrap();
        assert_eq!(fields.description.as_deref(), Some("  "));
        assert_eq!(fields.title, UNTITLED_PLACEHOLDER);
    }
}
