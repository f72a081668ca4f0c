//! Domain models for storefront.

pub mod documents;
pub mod session;

pub use documents::{CartLine, FavouriteEntry, Order, OrderItem, UserProfile};
pub use session::keys as session_keys;
