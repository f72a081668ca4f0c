//! Session-related types.
//!
//! The only session state the storefront keeps is the transient checkout
//! selection: the cart-line positions the shopper has marked for purchase.
//! It lives in the session rather than the document store because it is
//! page-session-scoped and must not survive the transaction.

/// Session keys for transient state.
pub mod keys {
    /// Key for the checkout selection slot (a `Vec<usize>` of cart indices).
    pub const CHECKOUT_SELECTION: &str = "checkout_selection";
}
