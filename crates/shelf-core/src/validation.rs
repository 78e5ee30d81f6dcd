//! # Validation Module
//!
//! Field rules for catalog items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog document (JSON / TOML / YAML)                        │
//! │  └── Type validation (deserialization, numeric price strings)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: shelf-catalog loader                                         │
//! │  └── THIS MODULE via Item::validate: field rules                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store / Cart                                                 │
//! │  └── Duplicate and match-count checks (CoreError)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shelf_core::validation::{validate_hashtag, validate_price};
//!
//! validate_price(12).unwrap();
//! assert!(validate_hashtag("gluten free").is_ok());
//! assert!(validate_hashtag("").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted item name.
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted item description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
///
/// The name is NOT trimmed: name search is an exact, case-sensitive
/// substring match, so surrounding whitespace is part of the name.
///
/// ## Example
/// ```rust
/// use shelf_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Apple Pie").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a hashtag.
///
/// Any non-empty string is a hashtag, spaces included: hashtag search is an
/// exact comparison, so `"gluten free"` is found by `"gluten free"` only.
pub fn validate_hashtag(tag: &str) -> ValidationResult<()> {
    if tag.is_empty() {
        return Err(ValidationError::Required {
            field: "hashtag".to_string(),
        });
    }

    Ok(())
}

/// Validates an item description. Empty descriptions are allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use shelf_core::validation::validate_price;
///
/// assert!(validate_price(0).is_ok());
/// assert!(validate_price(-100).is_err());
/// ```
pub fn validate_price(price: i64) -> ValidationResult<()> {
    if price < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
            value: price,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Apple Pie").is_ok());
        assert!(validate_item_name(" Padded ").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("  \t").is_err());
        assert!(validate_item_name(&"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_hashtag() {
        assert!(validate_hashtag("fruit").is_ok());
        assert!(validate_hashtag("gluten-free").is_ok());
        assert!(validate_hashtag("gluten free").is_ok());

        assert!(validate_hashtag("").is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(1099).is_ok());
        assert!(matches!(
            validate_price(-1),
            Err(ValidationError::Negative { value: -1, .. })
        ));
    }
}
