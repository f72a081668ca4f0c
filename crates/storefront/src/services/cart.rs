//! Cart manager.
//!
//! Mutates the cart document against the catalog: merge-by-id add,
//! positional remove, and quantity edits clamped to a minimum of one.

use ethereal_eve_core::{Price, ProductId};

use crate::catalog::Catalog;
use crate::models::CartLine;
use crate::store::{DocumentStore, StoreError};

/// Outcome of an add-to-cart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCart {
    /// The line was appended or merged; carries the product title for the
    /// user notice.
    Added { title: String },
    /// The product id is not in the catalog. Silent no-op.
    UnknownProduct,
}

/// Cart operations over the document store.
pub struct CartService<'a> {
    store: &'a DocumentStore,
    catalog: &'a Catalog,
}

impl<'a> CartService<'a> {
    #[must_use]
    pub const fn new(store: &'a DocumentStore, catalog: &'a Catalog) -> Self {
        Self { store, catalog }
    }

    /// Add `qty` units of a product to the cart.
    ///
    /// Resolves the id against the catalog; an unknown id leaves the cart
    /// document unchanged. An existing line for the same product merges by
    /// accumulating `qty`, saturating at `u32::MAX`; otherwise a new line
    /// is appended. `qty` is clamped to a minimum of one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart document cannot be written.
    pub fn add(&self, id: &ProductId, qty: u32) -> Result<AddToCart, StoreError> {
        let Some(product) = self.catalog.get(id) else {
            tracing::debug!(product_id = %id, "add_to_cart ignored unknown product");
            return Ok(AddToCart::UnknownProduct);
        };
        let qty = qty.max(1);

        let mut cart = self.store.cart();
        if let Some(line) = cart.iter_mut().find(|line| &line.id == id) {
            // Form input is untrusted; a repeat add near u32::MAX must not
            // wrap back through zero.
            line.qty = line.qty.saturating_add(qty);
        } else {
            cart.push(CartLine::for_product(product, qty));
        }
        self.store.save_cart(&cart)?;

        Ok(AddToCart::Added {
            title: product.title.clone(),
        })
    }

    /// Remove the line at `index`. No-op when the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart document cannot be written.
    pub fn remove(&self, index: usize) -> Result<(), StoreError> {
        let mut cart = self.store.cart();
        if index >= cart.len() {
            return Ok(());
        }
        cart.remove(index);
        self.store.save_cart(&cart)
    }

    /// Set the quantity of the line at `index`, clamped to a minimum of
    /// one. No-op when the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart document cannot be written.
    pub fn set_quantity(&self, index: usize, qty: u32) -> Result<(), StoreError> {
        let mut cart = self.store.cart();
        let Some(line) = cart.get_mut(index) else {
            return Ok(());
        };
        line.qty = qty.max(1);
        self.store.save_cart(&cart)
    }

    /// The current cart lines.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.store.cart()
    }

    /// Total number of units in the cart, for the badge. Saturates at
    /// `u32::MAX`.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.store
            .cart()
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.qty))
    }

    /// Sum of `price * qty` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.store.cart().iter().map(CartLine::line_total).sum()
    }
}
