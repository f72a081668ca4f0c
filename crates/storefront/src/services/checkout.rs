//! Checkout/order manager.
//!
//! Drives the mock transaction over a single session:
//!
//! ```text
//! Idle -> SelectionPending -> PaymentPending -> Completed
//! ```
//!
//! Selecting cart positions parks them in the session's transient slot
//! (`models::session_keys::CHECKOUT_SELECTION`), never the document store.
//! The payment view resolves those positions against the *current* cart;
//! a selection that resolves to nothing aborts back to Idle. Completion
//! snapshots the resolved lines into an immutable order, appends it to the
//! order history, and removes the purchased positions from the cart in
//! descending index order so earlier removals cannot shift later ones.
//!
//! The orders and cart writes are two separate saves with no atomicity
//! between them; a crash in between leaves one side ahead of the other.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use thiserror::Error;

use ethereal_eve_core::{OrderId, OrderStatus, Price};

use crate::models::{CartLine, Order, OrderItem};
use crate::store::{DocumentStore, StoreError};

/// Errors from checkout operations.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The selection resolved to zero cart lines, e.g. because the cart
    /// was mutated underneath a stale selection. The transaction aborts.
    #[error("nothing selected for checkout")]
    EmptySelection,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The selected cart lines materialized against the current cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    /// Selected positions, ascending and de-duplicated, all in range.
    pub indices: Vec<usize>,
    /// The lines at those positions.
    pub items: Vec<CartLine>,
    /// Sum of `price * qty` over the selected lines.
    pub subtotal: Price,
}

/// Checkout operations over the document store.
pub struct CheckoutService<'a> {
    store: &'a DocumentStore,
}

impl<'a> CheckoutService<'a> {
    #[must_use]
    pub const fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Resolve selected cart positions against the current cart document.
    ///
    /// Out-of-range and duplicate indices are dropped; the survivors are
    /// returned ascending alongside their lines and subtotal.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptySelection` when nothing resolves.
    pub fn resolve(&self, selected: &[usize]) -> Result<ResolvedSelection, CheckoutError> {
        let cart = self.store.cart();

        let mut indices: Vec<usize> = selected
            .iter()
            .copied()
            .filter(|&i| i < cart.len())
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let items: Vec<CartLine> = indices
            .iter()
            .filter_map(|&i| cart.get(i).cloned())
            .collect();
        if items.is_empty() {
            return Err(CheckoutError::EmptySelection);
        }

        let subtotal = items.iter().map(CartLine::line_total).sum();
        Ok(ResolvedSelection {
            indices,
            items,
            subtotal,
        })
    }

    /// Complete the transaction for the selected positions.
    ///
    /// Builds an order snapshot with a fresh time-based id and status
    /// `Processing`, appends it to the order history, then removes the
    /// purchased positions from the cart in descending index order.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptySelection` when nothing resolves, or a
    /// `StoreError` if either document write fails.
    pub fn complete(&self, selected: &[usize]) -> Result<Order, CheckoutError> {
        let resolved = self.resolve(selected)?;

        let order = Order {
            id: next_order_id(),
            items: resolved.items.iter().map(OrderItem::from).collect(),
            total: resolved.subtotal,
            date: Utc::now().format("%-d %B %Y").to_string(),
            status: OrderStatus::Processing,
        };
        self.store.append_order(order.clone())?;

        // Descending order: removing a later position first keeps the
        // earlier positions stable.
        let mut cart = self.store.cart();
        for &index in resolved.indices.iter().rev() {
            if index < cart.len() {
                cart.remove(index);
            }
        }
        self.store.save_cart(&cart)?;

        Ok(order)
    }
}

/// Generate a unique time-based order id.
///
/// Ids are derived from the current Unix time in milliseconds; rapid
/// successive checkouts bump the value monotonically so two orders can
/// never share an id within a process.
fn next_order_id() -> OrderId {
    static LAST: AtomicI64 = AtomicI64::new(0);

    let now = Utc::now().timestamp_millis();
    let mut prev = LAST.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return OrderId::new(format!("EE-{candidate}")),
            Err(observed) => prev = observed,
        }
    }
}
