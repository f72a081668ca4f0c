//! Integration tests for Ethereal Eve.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront against a scratch data directory
//! STOREFRONT_DATA_DIR=$(mktemp -d) cargo run -p ethereal-eve-storefront
//!
//! # Run the end-to-end tests
//! cargo test -p ethereal-eve-integration-tests -- --ignored
//! ```
//!
//! The tests drive a running server over HTTP with a cookie-holding
//! client, the same way a browser session would. They are `#[ignore]`d by
//! default because they require the server and mutate its data directory.
