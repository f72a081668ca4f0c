//! Ethereal Eve Core - Shared types library.
//!
//! This crate provides common types used across all Ethereal Eve components:
//! - `storefront` - Public-facing storefront site
//! - `integration-tests` - End-to-end test harness
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no persistence.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
