//! Unified error handling for the storefront core.
//!
//! The error taxonomy mirrors how failures are experienced in the store:
//!
//! - [`ValidationError`] - user input problems (bad CEP, unknown coupon,
//!   unchecked terms box). Recovered locally; the flow does not advance.
//! - [`StorefrontError::NotFound`] - navigation to an unknown entity.
//!   Surfaced as a not-found view, never fatal.
//! - Catalog/config load failures - startup wiring problems.
//!
//! Storage read/write failures are deliberately absent: the store container
//! degrades to in-memory state and never surfaces them (see
//! [`crate::store::storage`]). Nothing in this crate retries automatically.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// User input failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Catalog dataset could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// A recoverable user-input validation failure.
///
/// These are surfaced as transient user-facing messages; the current
/// operation is rejected and the user re-attempts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// CEP lookup input had fewer than 8 digits.
    #[error("invalid CEP: enter 8 digits")]
    InvalidCep,

    /// Order confirmation attempted without accepting the terms.
    #[error("terms of use must be accepted before confirming the order")]
    TermsNotAccepted,

    /// Coupon code is not recognized.
    #[error("invalid coupon code: {0}")]
    InvalidCoupon(String),

    /// Operation requires a non-empty cart.
    #[error("cart is empty")]
    EmptyCart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::NotFound("product p99".to_string());
        assert_eq!(err.to_string(), "not found: product p99");

        let err = StorefrontError::from(ValidationError::InvalidCep);
        assert_eq!(err.to_string(), "validation error: invalid CEP: enter 8 digits");
    }

    #[test]
    fn test_validation_error_coupon_message() {
        let err = ValidationError::InvalidCoupon("WRONG10".to_string());
        assert_eq!(err.to_string(), "invalid coupon code: WRONG10");
    }
}
