//! Favourites manager.
//!
//! Mutates the favourites document: duplicate-free adds, positional
//! removal, and moving an entry into the cart.

use ethereal_eve_core::ProductId;

use crate::catalog::Catalog;
use crate::models::{CartLine, FavouriteEntry};
use crate::store::{DocumentStore, StoreError};

/// Outcome of an add-to-favourites request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToFavourites {
    /// The entry was appended; carries the product title for the notice.
    Added { title: String },
    /// The product is already favourited. No mutation; the caller surfaces
    /// a distinct notice.
    AlreadyPresent { title: String },
    /// The product id is not in the catalog. Silent no-op.
    UnknownProduct,
}

/// Favourites operations over the document store.
pub struct WishlistService<'a> {
    store: &'a DocumentStore,
    catalog: &'a Catalog,
}

impl<'a> WishlistService<'a> {
    #[must_use]
    pub const fn new(store: &'a DocumentStore, catalog: &'a Catalog) -> Self {
        Self { store, catalog }
    }

    /// Add a product to favourites.
    ///
    /// A product already present is left untouched and reported as
    /// `AlreadyPresent` so the caller can show the duplicate notice.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the favourites document cannot be written.
    pub fn add(&self, id: &ProductId) -> Result<AddToFavourites, StoreError> {
        let Some(product) = self.catalog.get(id) else {
            tracing::debug!(product_id = %id, "add_to_favourites ignored unknown product");
            return Ok(AddToFavourites::UnknownProduct);
        };

        let mut favourites = self.store.favourites();
        if favourites.iter().any(|entry| &entry.id == id) {
            return Ok(AddToFavourites::AlreadyPresent {
                title: product.title.clone(),
            });
        }
        favourites.push(FavouriteEntry::from(product));
        self.store.save_favourites(&favourites)?;

        Ok(AddToFavourites::Added {
            title: product.title.clone(),
        })
    }

    /// Remove the entry at `index`. No-op when the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the favourites document cannot be written.
    pub fn remove(&self, index: usize) -> Result<(), StoreError> {
        let mut favourites = self.store.favourites();
        if index >= favourites.len() {
            return Ok(());
        }
        favourites.remove(index);
        self.store.save_favourites(&favourites)
    }

    /// Move a favourite into the cart: add-to-cart merge semantics, then
    /// remove the favourite with a single favourites save. Returns the
    /// moved product's title, or `None` if the id is not favourited.
    ///
    /// The cart line is built from the favourite entry itself, so a
    /// favourite survives its product leaving the catalog. The cart and
    /// favourites writes are two separate saves; only the favourites side
    /// is atomic.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either document cannot be written.
    pub fn move_to_cart(&self, id: &ProductId) -> Result<Option<String>, StoreError> {
        let favourites = self.store.favourites();
        let Some(entry) = favourites.iter().find(|entry| &entry.id == id) else {
            return Ok(None);
        };
        let title = entry.title.clone();

        let mut cart = self.store.cart();
        if let Some(line) = cart.iter_mut().find(|line| &line.id == id) {
            line.qty = line.qty.saturating_add(1);
        } else {
            cart.push(CartLine {
                id: entry.id.clone(),
                title: entry.title.clone(),
                price: entry.price,
                img: entry.img.clone(),
                qty: 1,
            });
        }
        self.store.save_cart(&cart)?;

        let remaining: Vec<FavouriteEntry> = favourites
            .into_iter()
            .filter(|entry| &entry.id != id)
            .collect();
        self.store.save_favourites(&remaining)?;

        Ok(Some(title))
    }

    /// The current favourites entries.
    #[must_use]
    pub fn entries(&self) -> Vec<FavouriteEntry> {
        self.store.favourites()
    }

    /// Number of favourited products, for the badge.
    #[must_use]
    pub fn count(&self) -> u32 {
        u32::try_from(self.store.favourites().len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::services::CartService;

    fn temp_store() -> DocumentStore {
        static SEQ: AtomicU32 = AtomicU32::new(0);
        let dir = std::env::temp_dir().join(format!(
            "ee-wishlist-test-{}-{}",
            std::process::id(),
            SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        DocumentStore::open(dir).expect("open temp store")
    }

    #[test]
    fn test_duplicate_add_is_reported_and_skipped() {
        let store = temp_store();
        let catalog = Catalog::ethereal_eve();
        let wishlist = WishlistService::new(&store, &catalog);
        let p1 = ProductId::new("p1");

        assert!(matches!(
            wishlist.add(&p1).expect("add"),
            AddToFavourites::Added { .. }
        ));
        assert!(matches!(
            wishlist.add(&p1).expect("add again"),
            AddToFavourites::AlreadyPresent { .. }
        ));
        assert_eq!(wishlist.entries().len(), 1);
    }

    #[test]
    fn test_add_unknown_product_is_silent_noop() {
        let store = temp_store();
        let catalog = Catalog::ethereal_eve();
        let wishlist = WishlistService::new(&store, &catalog);

        let outcome = wishlist.add(&ProductId::new("missing")).expect("add");
        assert_eq!(outcome, AddToFavourites::UnknownProduct);
        assert!(wishlist.entries().is_empty());
    }

    #[test]
    fn test_move_to_cart_removes_favourite_and_merges() {
        let store = temp_store();
        let catalog = Catalog::ethereal_eve();
        let wishlist = WishlistService::new(&store, &catalog);
        let cart = CartService::new(&store, &catalog);
        let p1 = ProductId::new("p1");

        // Already one unit in the cart; moving the favourite merges.
        cart.add(&p1, 1).expect("seed cart");
        wishlist.add(&p1).expect("favourite");

        let moved = wishlist.move_to_cart(&p1).expect("move");
        assert_eq!(moved.as_deref(), Some("Velvet Dusk Eau de Parfum"));
        assert!(wishlist.entries().is_empty());

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().map(|l| l.qty), Some(2));
    }

    #[test]
    fn test_move_to_cart_saturates_full_line() {
        let store = temp_store();
        let catalog = Catalog::ethereal_eve();
        let wishlist = WishlistService::new(&store, &catalog);
        let cart = CartService::new(&store, &catalog);
        let p1 = ProductId::new("p1");

        cart.add(&p1, u32::MAX).expect("seed cart");
        wishlist.add(&p1).expect("favourite");
        wishlist.move_to_cart(&p1).expect("move");

        assert_eq!(cart.lines().first().map(|l| l.qty), Some(u32::MAX));
    }

    #[test]
    fn test_move_unfavourited_product_is_noop() {
        let store = temp_store();
        let catalog = Catalog::ethereal_eve();
        let wishlist = WishlistService::new(&store, &catalog);

        let moved = wishlist.move_to_cart(&ProductId::new("p1")).expect("move");
        assert_eq!(moved, None);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_at_position() {
        let store = temp_store();
        let catalog = Catalog::ethereal_eve();
        let wishlist = WishlistService::new(&store, &catalog);

        wishlist.add(&ProductId::new("p1")).expect("add");
        wishlist.add(&ProductId::new("p2")).expect("add");
        wishlist.remove(0).expect("remove");

        let entries = wishlist.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.first().map(|e| e.id.as_str()), Some("p2"));

        // Out of range: no-op.
        wishlist.remove(9).expect("remove");
        assert_eq!(wishlist.count(), 1);
    }
}
