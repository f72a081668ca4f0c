//! Service layer for storefront.
//!
//! The services own every mutation of the persisted documents. Route
//! handlers never touch the store's write path directly; they call a
//! service and re-render from the result.

pub mod cart;
pub mod checkout;
pub mod wishlist;

pub use cart::CartService;
pub use checkout::CheckoutService;
pub use wishlist::WishlistService;
