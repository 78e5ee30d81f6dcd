//! # Cart
//!
//! The customer's shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Store Operation          Cart Method             Cart State Change     │
//! │  ───────────────          ───────────             ─────────────────     │
//! │                                                                         │
//! │  add_by_name() ─────────► add() ────────────────► items.push(item)     │
//! │                                                                         │
//! │  remove_by_name() ──────► remove_by_name() ─────► items.remove(i)      │
//! │                                                                         │
//! │  checkout() ────────────► subtotal() ───────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Every method either succeeds completely or leaves the cart      │
//! │        exactly as it was.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, Scope};
use crate::types::Item;

/// The shopping cart.
///
/// ## Invariants
/// - No two items are equal
/// - Items keep the order in which they were added
///
/// Items are snapshots: the cart owns clones of the catalog items it was
/// given, so it never borrows from the store that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends an item to the cart.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CoreError::DuplicateItem)` if an equal item is already present
    pub fn add(&mut self, item: Item) -> CoreResult<()> {
        if self.contains(&item) {
            return Err(CoreError::duplicate(item.name));
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes the first item whose name is exactly `name`.
    pub fn remove_by_name(&mut self, name: &str) -> CoreResult<Item> {
        let index = self
            .items
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| CoreError::not_found(name, Scope::Cart))?;

        Ok(self.items.remove(index))
    }

    /// Sum of the prices of all items; 0 for an empty cart.
    ///
    /// Summed in i128 to prevent overflow on large prices.
    pub fn subtotal(&self) -> i128 {
        self.items.iter().map(|i| i128::from(i.price)).sum()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns true if an equal item is in the cart.
    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Returns the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
