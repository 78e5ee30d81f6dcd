//! # Error Types
//!
//! Domain-specific error types for shelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shelf-core errors (this file)                                         │
//! │  ├── CoreError        - Cart and store rule violations                 │
//! │  └── ValidationError  - Item field validation failures                 │
//! │                                                                         │
//! │  shelf-catalog errors (separate crate)                                 │
//! │  └── CatalogError     - Reading/parsing the catalog document           │
//! │                                                                         │
//! │  shelf-cli errors (in app)                                             │
//! │  └── CliError         - Startup failures of the shell                  │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → CliError → exit code           │
//! │        CoreError → printed by the shell, session continues            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every message names the offending item name or search term
//! 3. Errors are enum variants, never String
//! 4. A failed operation never leaves the cart half-mutated

use std::fmt;

use thiserror::Error;

// =============================================================================
// Scope
// =============================================================================

/// Where a name was looked up when resolving an add/remove request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The store catalog (`Store::add_by_name`).
    Store,
    /// The customer's cart (`Store::remove_by_name`, `Cart::remove_by_name`).
    Cart,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Store => f.write_str("store"),
            Scope::Cart => f.write_str("shopping cart"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Cart and store errors.
///
/// All variants are recoverable: the caller reports them and carries on
/// with the same store.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No item matches the given name.
    ///
    /// ## When This Occurs
    /// - `add_by_name` with a substring no catalog item contains
    /// - `remove_by_name` with a substring no cart item contains
    /// - `Cart::remove_by_name` with a name not in the cart
    #[error("Item '{name}' doesn't exist in the {scope}")]
    ItemNotFound { name: String, scope: Scope },

    /// More than one item matches a name substring.
    ///
    /// ## User Workflow
    /// ```text
    /// add "Apple"
    ///      │
    ///      ▼
    /// Catalog matches: "Apple Pie", "Apple Juice"
    ///      │
    ///      ▼
    /// AmbiguousMatch { name: "Apple", scope: Store, matches: 2 }
    ///      │
    ///      ▼
    /// Shell shows: "Too many items in the store match the name 'Apple' (2 matches)"
    /// ```
    #[error("Too many items in the {scope} match the name '{name}' ({matches} matches)")]
    AmbiguousMatch {
        name: String,
        scope: Scope,
        matches: usize,
    },

    /// The item is already in the cart.
    #[error("Item '{name}' already exists in the shopping cart")]
    DuplicateItem { name: String },
}

impl CoreError {
    /// Creates an ItemNotFound error for a name in the given scope.
    pub fn not_found(name: impl Into<String>, scope: Scope) -> Self {
        CoreError::ItemNotFound {
            name: name.into(),
            scope,
        }
    }

    /// Creates a DuplicateItem error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        CoreError::DuplicateItem { name: name.into() }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while vetting catalog records, before any item reaches a store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::not_found("Tea", Scope::Store);
        assert_eq!(err.to_string(), "Item 'Tea' doesn't exist in the store");

        let err = CoreError::not_found("Tea", Scope::Cart);
        assert_eq!(
            err.to_string(),
            "Item 'Tea' doesn't exist in the shopping cart"
        );

        let err = CoreError::AmbiguousMatch {
            name: "Apple".to_string(),
            scope: Scope::Store,
            matches: 2,
        };
        assert_eq!(
            err.to_string(),
            "Too many items in the store match the name 'Apple' (2 matches)"
        );

        let err = CoreError::duplicate("Apple Pie");
        assert_eq!(
            err.to_string(),
            "Item 'Apple Pie' already exists in the shopping cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
            value: -3,
        };
        assert_eq!(err.to_string(), "price must not be negative (got -3)");
    }
}
