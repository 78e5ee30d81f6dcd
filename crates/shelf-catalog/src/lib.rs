//! # shelf-catalog: Catalog Loading for Shelf
//!
//! Turns a catalog document on disk into the `Vec<Item>` a
//! [`shelf_core::Store`] is built from.
//!
//! ## Module Organization
//!
//! - [`loader`] - Format detection, file reading, record validation
//! - [`record`] - Serde shape of the document (string-or-integer prices)
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelf_catalog::load_catalog;
//! use shelf_core::Store;
//!
//! let items = load_catalog("demos/catalog.json")?;
//! let store = Store::new(items);
//! # Ok::<(), shelf_catalog::CatalogError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loader;
pub mod record;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog, parse_catalog, CatalogFormat};
pub use record::{CatalogDocument, CatalogRecord};
