//! TechPulse Storefront core library.
//!
//! This crate implements the shopping state and query logic behind the
//! TechPulse storefront UI. The presentation layer (routing, rendering,
//! toast display) lives elsewhere and consumes this crate; everything here
//! is plain state, pure derivation, and explicit ports for the few effects
//! the core performs (durable storage, clipboard, notifications).
//!
//! # Modules
//!
//! - [`catalog`] - Static product/category dataset plus the pure query layer
//!   (filter, sort, paginate, autocomplete suggestions)
//! - [`store`] - Cart and wishlist state container with persistence through
//!   an injectable storage port
//! - [`checkout`] - The three-step checkout wizard and simulated order
//!   submission
//! - [`pricing`] - Shipping options, coupon validation, and order summary math
//! - [`share`] - Share-link and coupon-copy helpers over a clipboard port
//! - [`state`] - Session-scoped wiring of catalog, config, and store
//! - [`config`] / [`error`] - Environment configuration and the error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod pricing;
pub mod share;
pub mod state;
pub mod store;

pub use catalog::{Catalog, Category, Product, ProductQuery, QueryResults, SortKey, Suggestion};
pub use checkout::{CheckoutEntry, CheckoutFlow, CheckoutStage, OrderConfirmation, Step};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError, ValidationError};
pub use pricing::{OrderSummary, ShippingMethod};
pub use state::{Session, StorefrontContext};
pub use store::{CartItem, StoreState};
