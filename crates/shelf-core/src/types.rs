//! # Domain Types
//!
//! The catalog item, the one value type every other module passes around.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Item                                                                   │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  name         "Apple Pie"            business key (unique per catalog) │
//! │  price        12                     smallest currency unit, >= 0      │
//! │  hashtags     ["sweet", "bakery"]    ordered, repeats allowed          │
//! │  description  "Warm, with cinnamon"                                     │
//! │                                                                         │
//! │  Equality = all four fields equal (derived PartialEq/Eq)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::validation::{
    validate_description, validate_hashtag, validate_item_name, validate_price,
    ValidationResult,
};

// =============================================================================
// Item
// =============================================================================

/// An item offered by the store.
///
/// Items are immutable once loaded: the store only ever hands out shared
/// references, and the cart keeps its own snapshot clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name, used as the lookup key for add/remove.
    pub name: String,

    /// Price in the smallest currency unit.
    pub price: i64,

    /// Hashtags in catalog order. The same tag may appear more than once.
    pub hashtags: Vec<String>,

    /// Free-form description.
    pub description: String,
}

impl Item {
    /// Creates a new item.
    pub fn new<I, S>(
        name: impl Into<String>,
        price: i64,
        hashtags: I,
        description: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Item {
            name: name.into(),
            price,
            hashtags: hashtags.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }

    /// Returns true if the item carries `tag` (exact match).
    #[inline]
    pub fn has_hashtag(&self, tag: &str) -> bool {
        self.hashtags.iter().any(|h| h == tag)
    }

    /// Checks every field against the item rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_item_name(&self.name)?;
        validate_price(self.price)?;
        for tag in &self.hashtags {
            validate_hashtag(tag)?;
        }
        validate_description(&self.description)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
