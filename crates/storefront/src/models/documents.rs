//! Persisted document types.
//!
//! Four independent JSON documents back the storefront: the cart, the
//! favourites list, the user profile, and the append-only order history.
//! Each is persisted wholesale under its own key by
//! [`crate::store::DocumentStore`]; there is no cross-document transaction.

use serde::{Deserialize, Serialize};

use ethereal_eve_core::{OrderId, OrderStatus, Price, ProductId};

use crate::catalog::Product;

/// A line item in the cart.
///
/// Invariant: at most one line per product id; repeat adds merge into the
/// existing line by accumulating `qty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub img: String,
    pub qty: u32,
}

impl CartLine {
    /// Total for this line (`price * qty`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.line_total(self.qty)
    }

    /// Build a fresh line for a catalog product.
    #[must_use]
    pub fn for_product(product: &Product, qty: u32) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            img: product.img.clone(),
            qty,
        }
    }
}

/// A saved-for-later product reference.
///
/// Invariant: at most one entry per product id; a duplicate add is a no-op
/// surfaced to the user as a notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteEntry {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub img: String,
}

impl From<&Product> for FavouriteEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            img: product.img.clone(),
        }
    }
}

/// The shopper's profile. Singleton, overwritten wholesale on save.
///
/// The order history is a separate authoritative document; the profile
/// deliberately carries no embedded orders field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A snapshot of a cart line at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub qty: u32,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            title: line.title.clone(),
            price: line.price,
            qty: line.qty,
        }
    }
}

/// An immutable record of a completed mock purchase.
///
/// Appended to the orders document on checkout completion; never mutated
/// or removed thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub total: Price,
    /// Display date, e.g. "25 August 2026".
    pub date: String,
    pub status: OrderStatus,
}
