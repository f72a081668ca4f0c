//! File-backed JSON document store.
//!
//! Four independent documents live under fixed keys in the data directory,
//! one JSON file per key: `cart`, `favourites`, `profile`, `orders`. Loading
//! a missing or unparsable document yields the typed empty default and never
//! surfaces an error; saving serializes and overwrites the previous value.
//! `save` is the single write path to persistence.
//!
//! Writes are last-writer-wins. A process-level mutex keeps individual file
//! reads and writes from interleaving, but read-modify-write sequences are
//! not transactional across documents.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{CartLine, FavouriteEntry, Order, UserProfile};

/// Document keys. Each key maps to `<data_dir>/<key>.json`.
mod keys {
    pub const CART: &str = "cart";
    pub const FAVOURITES: &str = "favourites";
    pub const PROFILE: &str = "profile";
    pub const ORDERS: &str = "orders";
}

/// Errors from the store's write path.
///
/// Loads never fail: absent or corrupt data falls back to the default.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed store for the four persisted documents.
pub struct DocumentStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl DocumentStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    /// The directory holding the document files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load a document, falling back to its default when the file is
    /// missing or holds unparsable JSON.
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let Ok(raw) = std::fs::read_to_string(self.path(key)) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unparsable document");
                T::default()
            }
        }
    }

    /// Serialize and overwrite a document.
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        std::fs::write(self.path(key), json)?;
        Ok(())
    }

    /// The cart document.
    #[must_use]
    pub fn cart(&self) -> Vec<CartLine> {
        self.load(keys::CART)
    }

    /// Overwrite the cart document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the file write fails.
    pub fn save_cart(&self, cart: &[CartLine]) -> Result<(), StoreError> {
        self.save(keys::CART, &cart)
    }

    /// The favourites document.
    #[must_use]
    pub fn favourites(&self) -> Vec<FavouriteEntry> {
        self.load(keys::FAVOURITES)
    }

    /// Overwrite the favourites document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the file write fails.
    pub fn save_favourites(&self, favourites: &[FavouriteEntry]) -> Result<(), StoreError> {
        self.save(keys::FAVOURITES, &favourites)
    }

    /// The profile document.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        self.load(keys::PROFILE)
    }

    /// Overwrite the profile document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the file write fails.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.save(keys::PROFILE, profile)
    }

    /// The order history, oldest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.load(keys::ORDERS)
    }

    /// Append an order to the history. Orders are never mutated or removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the file write fails.
    pub fn append_order(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self.orders();
        orders.push(order);
        self.save(keys::ORDERS, &orders)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use rust_decimal::dec;

    use ethereal_eve_core::{OrderId, OrderStatus, Price, ProductId};

    use super::*;

    fn temp_store() -> DocumentStore {
        static SEQ: AtomicU32 = AtomicU32::new(0);
        let dir = std::env::temp_dir().join(format!(
            "ee-store-test-{}-{}",
            std::process::id(),
            SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        DocumentStore::open(dir).expect("open temp store")
    }

    fn line(id: &str, price: Price, qty: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            img: format!("/static/images/products/{id}.jpg"),
            qty,
        }
    }

    #[test]
    fn test_empty_store_yields_typed_defaults() {
        let store = temp_store();
        assert!(store.cart().is_empty());
        assert!(store.favourites().is_empty());
        assert!(store.orders().is_empty());
        assert_eq!(store.profile(), UserProfile::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store();
        let cart = vec![line("p1", Price::new(dec!(200)), 2)];
        store.save_cart(&cart).expect("save cart");
        assert_eq!(store.cart(), cart);
    }

    #[test]
    fn test_corrupt_document_falls_back_to_default() {
        let store = temp_store();
        store.save_cart(&[line("p1", Price::new(dec!(200)), 1)]).expect("save");
        std::fs::write(store.path(keys::CART), "{not json").expect("corrupt file");
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_corrupt_profile_falls_back_to_default() {
        let store = temp_store();
        std::fs::write(store.path(keys::PROFILE), "[]").expect("wrong shape");
        assert_eq!(store.profile(), UserProfile::default());
    }

    #[test]
    fn test_profile_overwritten_wholesale() {
        let store = temp_store();
        store
            .save_profile(&UserProfile {
                name: Some("Eve".to_owned()),
                email: Some("eve@example.com".to_owned()),
                phone: None,
            })
            .expect("save profile");
        // A later save with fewer fields replaces the document entirely.
        store
            .save_profile(&UserProfile {
                name: Some("Eve".to_owned()),
                email: None,
                phone: None,
            })
            .expect("save profile");
        let profile = store.profile();
        assert_eq!(profile.name.as_deref(), Some("Eve"));
        assert_eq!(profile.email, None);
    }

    #[test]
    fn test_orders_append_only() {
        let store = temp_store();
        let order = Order {
            id: OrderId::new("EE-1"),
            items: vec![],
            total: Price::zero(),
            date: "25 August 2026".to_owned(),
            status: OrderStatus::Processing,
        };
        store.append_order(order.clone()).expect("append");
        store
            .append_order(Order {
                id: OrderId::new("EE-2"),
                ..order
            })
            .expect("append");

        let orders = store.orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders.first().map(|o| o.id.as_str()), Some("EE-1"));
        assert_eq!(orders.last().map(|o| o.id.as_str()), Some("EE-2"));
    }

    #[test]
    fn test_documents_are_independent() {
        let store = temp_store();
        store.save_cart(&[line("p1", Price::new(dec!(200)), 1)]).expect("save");
        std::fs::write(store.path(keys::FAVOURITES), "garbage").expect("corrupt favourites");

        // Corrupting one document never affects another.
        assert_eq!(store.cart().len(), 1);
        assert!(store.favourites().is_empty());
    }
}
