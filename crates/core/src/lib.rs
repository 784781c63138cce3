//! TechPulse Core - Shared types library.
//!
//! This crate provides common types used across all TechPulse components:
//! - `storefront` - The storefront core (catalog, cart, checkout)
//! - `cli` - Command-line consumer for browsing and test-driving the store
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no async. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and order numbers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
