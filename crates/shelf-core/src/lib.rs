//! # shelf-core: Pure Store Logic for Shelf
//!
//! This crate is the **heart** of Shelf. It holds the cart, the store
//! query engine and the hashtag-affinity ranking, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/shelf-cli (shell)                       │   │
//! │  │    items ──► search / tag ──► add / remove ──► checkout         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shelf-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │   store   │  │  ranking  │  │   │
//! │  │   │   Item    │  │   Cart    │  │   Store   │  │ affinity  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────▲───────────────────────────────────┘   │
//! │                                │ Vec<Item>                              │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                shelf-catalog (catalog loading)                  │   │
//! │  │              JSON / TOML / YAML documents, record validation    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The catalog `Item`
//! - [`cart`] - Ordered, duplicate-free cart
//! - [`store`] - Catalog search and name-based add/remove
//! - [`ranking`] - Hashtag-affinity ordering of search results
//! - [`error`] - Domain error types
//! - [`validation`] - Item field rules
//!
//! ## Example Usage
//!
//! ```rust
//! use shelf_core::{Item, Store};
//!
//! let mut store = Store::new(vec![
//!     Item::new("Apple Pie", 12, ["sweet"], "Warm"),
//!     Item::new("Honey Cake", 9, ["sweet", "sweet"], "Sticky"),
//!     Item::new("Chili Sauce", 4, ["spicy"], "Hot"),
//! ]);
//!
//! store.add_by_name("Pie").unwrap();
//!
//! // Honey Cake shares two #sweet with the cart, Chili Sauce none.
//! let names: Vec<_> = store.search_by_name("").iter().map(|i| i.name.as_str()).collect();
//! assert_eq!(names, ["Honey Cake", "Chili Sauce"]);
//!
//! assert_eq!(store.checkout(), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod ranking;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, Scope, ValidationError};
pub use store::Store;
pub use types::Item;
