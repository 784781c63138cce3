//! Shipping options, coupon validation, and order summary math.
//!
//! All arithmetic is `Decimal`; totals are rounded to centavos only at the
//! end of each derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ValidationError;

/// The one promotional code the storefront accepts.
pub const COUPON_CODE: &str = "TECHPULSE10";

/// Percentage the coupon takes off the subtotal.
const COUPON_PERCENT: u32 = 10;

/// Shipping options offered at cart and checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Express,
    #[default]
    Standard,
    Economy,
}

impl ShippingMethod {
    /// Every option, in the order the UI lists them.
    pub const ALL: [Self; 3] = [Self::Express, Self::Standard, Self::Economy];

    /// Shipping cost in BRL.
    #[must_use]
    pub fn price(self) -> Decimal {
        match self {
            Self::Express => Decimal::new(2990, 2),
            Self::Standard => Decimal::new(1490, 2),
            Self::Economy => Decimal::ZERO,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::Standard => "Standard",
            Self::Economy => "Economy",
        }
    }

    /// Delivery window in business days.
    #[must_use]
    pub const fn delivery_estimate(self) -> &'static str {
        match self {
            Self::Express => "1-2 business days",
            Self::Standard => "5-8 business days",
            Self::Economy => "10-15 business days",
        }
    }

    /// Parse from the query-string form; unknown values fall back to the
    /// default method.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "express" => Self::Express,
            "economy" => Self::Economy,
            _ => Self::Standard,
        }
    }

    /// Query-string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::Standard => "standard",
            Self::Economy => "economy",
        }
    }
}

/// A validated discount coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub percent_off: u32,
}

impl Coupon {
    /// Discount this coupon takes off `subtotal`, rounded to centavos.
    #[must_use]
    pub fn discount_on(&self, subtotal: Decimal) -> Decimal {
        (subtotal * Decimal::from(self.percent_off) / Decimal::ONE_HUNDRED).round_dp(2)
    }
}

/// Validate a coupon code the user typed.
///
/// Matching is case-insensitive; blank input is a no-op rather than an
/// error, matching the cart form behavior.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCoupon` for an unrecognized non-empty
/// code.
pub fn validate_coupon(input: &str) -> Result<Option<Coupon>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.eq_ignore_ascii_case(COUPON_CODE) {
        info!(code = COUPON_CODE, "coupon applied");
        Ok(Some(Coupon {
            code: COUPON_CODE.to_string(),
            percent_off: COUPON_PERCENT,
        }))
    } else {
        Err(ValidationError::InvalidCoupon(trimmed.to_string()))
    }
}

/// Order totals derived from the cart subtotal plus shipping and coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute totals: `total = subtotal + shipping - discount`.
    #[must_use]
    pub fn compute(subtotal: Decimal, shipping: ShippingMethod, coupon: Option<&Coupon>) -> Self {
        let shipping_cost = shipping.price();
        let discount = coupon.map_or(Decimal::ZERO, |c| c.discount_on(subtotal));
        Self {
            subtotal,
            shipping: shipping_cost,
            discount,
            total: subtotal + shipping_cost - discount,
        }
    }
}

/// Format a BRL amount for display, e.g. `R$ 1.234,56`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    format!("R$ {}", techpulse_core::price::format_amount(amount))
}
