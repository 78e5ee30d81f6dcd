//! # Store
//!
//! The store query engine: catalog search, name resolution and the
//! customer's cart.
//!
//! ## Name Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add "Pie"                          remove "Pie"                        │
//! │     │                                  │                                │
//! │     ▼                                  ▼                                │
//! │  catalog items whose name           cart items whose name               │
//! │  contains "Pie"                     contains "Pie"                      │
//! │     │                                  │                                │
//! │     └──────────────┬───────────────────┘                                │
//! │                    ▼                                                    │
//! │             select_single()                                             │
//! │        0 matches → ItemNotFound                                         │
//! │       >1 matches → AmbiguousMatch                                       │
//! │        1 match   → continue                                             │
//! │                    │                                                    │
//! │     ┌──────────────┴───────────────────┐                                │
//! │     ▼                                  ▼                                │
//! │  already in cart? → DuplicateItem   cart.remove_by_name(exact name)     │
//! │  cart.add(item)                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult, Scope};
use crate::ranking::rank;
use crate::types::Item;

/// A store with a fixed catalog and one customer's cart.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Vec<Item>,
    cart: Cart,
}

impl Store {
    /// Creates a store over `catalog` with an empty cart.
    pub fn new(catalog: Vec<Item>) -> Self {
        Store {
            catalog,
            cart: Cart::new(),
        }
    }

    /// The full catalog, in load order.
    pub fn items(&self) -> &[Item] {
        &self.catalog
    }

    /// Read-only view of the customer's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Catalog items whose name contains `query`, ranked by hashtag affinity.
    ///
    /// Items already in the cart are left out. The empty query matches
    /// every item.
    pub fn search_by_name(&self, query: &str) -> Vec<&Item> {
        let results = rank(
            self.catalog.iter().filter(|i| i.name.contains(query)),
            &self.cart,
        );
        debug!(query, results = results.len(), "search by name");
        results
    }

    /// Catalog items carrying `hashtag` exactly, ranked by hashtag affinity.
    pub fn search_by_hashtag(&self, hashtag: &str) -> Vec<&Item> {
        let results = rank(
            self.catalog.iter().filter(|i| i.has_hashtag(hashtag)),
            &self.cart,
        );
        debug!(hashtag, results = results.len(), "search by hashtag");
        results
    }

    /// Adds the one catalog item whose name contains `query`.
    ///
    /// ## Errors
    /// - `ItemNotFound` (store scope) if no catalog item matches
    /// - `AmbiguousMatch` (store scope) if several do
    /// - `DuplicateItem` if the match is already in the cart
    pub fn add_by_name(&mut self, query: &str) -> CoreResult<&Item> {
        let item = select_single(&self.catalog, query, Scope::Store)?;

        if self.cart.contains(item) {
            return Err(CoreError::duplicate(item.name.as_str()));
        }

        self.cart.add(item.clone())?;
        debug!(query, item = %item.name, cart_size = self.cart.len(), "item added");
        Ok(item)
    }

    /// Removes the one cart item whose name contains `query`.
    ///
    /// ## Errors
    /// - `ItemNotFound` (cart scope) if no cart item matches
    /// - `AmbiguousMatch` (cart scope) if several do
    pub fn remove_by_name(&mut self, query: &str) -> CoreResult<Item> {
        let name = select_single(self.cart.items(), query, Scope::Cart)?
            .name
            .clone();

        let removed = self.cart.remove_by_name(&name)?;
        debug!(query, item = %removed.name, cart_size = self.cart.len(), "item removed");
        Ok(removed)
    }

    /// Total price of the cart. The cart is left as is.
    pub fn checkout(&self) -> i128 {
        self.cart.subtotal()
    }
}

/// Returns the single item among `candidates` whose name contains `query`.
fn select_single<'a, I>(candidates: I, query: &str, scope: Scope) -> CoreResult<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let matches: Vec<&Item> = candidates
        .into_iter()
        .filter(|i| i.name.contains(query))
        .collect();

    match matches.as_slice() {
        [] => Err(CoreError::not_found(query, scope)),
        [only] => Ok(*only),
        _ => Err(CoreError::AmbiguousMatch {
            name: query.to_string(),
            scope,
            matches: matches.len(),
        }),
    }
}
