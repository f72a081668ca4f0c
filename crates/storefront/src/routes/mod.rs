//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (product grid)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (?category= filter)
//! GET  /products/:id           - Product detail
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns toast, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Wishlist (HTMX fragments)
//! GET  /wishlist               - Wishlist page
//! POST /wishlist/add           - Add to favourites (toast; duplicate notice)
//! POST /wishlist/remove        - Remove entry (returns wishlist_items fragment)
//! POST /wishlist/move-to-cart  - Move favourite into cart
//! GET  /wishlist/count         - Wishlist count badge (fragment)
//!
//! # Checkout
//! POST /checkout/select        - Park selected cart positions in the session
//! GET  /checkout               - Payment view over the stored selection
//! POST /checkout/complete      - Mock payment submit; creates the order
//!
//! # Account
//! GET  /account                - Profile form + recent orders
//! POST /account/profile        - Save profile (overwrites wholesale)
//! GET  /account/orders         - Order history
//! ```

pub mod account;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/add", post(wishlist::add))
        .route("/remove", post(wishlist::remove))
        .route("/move-to-cart", post(wishlist::move_to_cart))
        .route("/count", get(wishlist::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/select", post(checkout::select))
        .route("/complete", post(checkout::complete))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::show))
        .route("/profile", post(account::save_profile))
        .route("/orders", get(account::orders))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Wishlist routes
        .nest("/wishlist", wishlist_routes())
        // Checkout routes
        .nest("/checkout", checkout_routes())
        // Account routes
        .nest("/account", account_routes())
}
