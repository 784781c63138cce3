//! Core types for TechPulse.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod price;

pub use id::*;
pub use order::OrderNumber;
pub use price::{CurrencyCode, Price};
