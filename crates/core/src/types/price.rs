//! Type-safe price representation using decimal arithmetic.
//!
//! Monetary amounts are `rust_decimal::Decimal` throughout the workspace;
//! floating point never touches a price. `Price` pairs an amount with its
//! currency and knows how to render itself for the storefront locale
//! (Brazilian convention: `R$ 1.234,56`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the store's default currency (BRL).
    #[must_use]
    pub const fn brl(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::BRL)
    }

    /// Create a price from an amount in the smallest currency unit
    /// (centavos for BRL).
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, 2), currency_code)
    }

    /// Format for display, e.g. `R$ 1.234,56`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            self.currency_code.symbol(),
            format_amount(self.amount)
        )
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Three-letter code as a string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

/// Render a decimal amount with the Brazilian thousands/decimal separators
/// (`.` for thousands, `,` for decimals), always with two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let plain = rounded.abs().to_string();

    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_owned(), format!("{f:0<2}")),
        None => (plain, "00".to_owned()),
    };

    // Insert a dot every three digits from the right.
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_small() {
        assert_eq!(format_amount(Decimal::new(1490, 2)), "14,90");
        assert_eq!(format_amount(Decimal::ZERO), "0,00");
    }

    #[test]
    fn test_format_amount_thousands() {
        assert_eq!(format_amount(Decimal::new(123_456, 2)), "1.234,56");
        assert_eq!(format_amount(Decimal::new(899_990, 2)), "8.999,90");
        assert_eq!(format_amount(Decimal::new(1_000_000_00, 2)), "1.000.000,00");
    }

    #[test]
    fn test_format_amount_rounds_to_two_places() {
        assert_eq!(format_amount(Decimal::new(12_346, 3)), "12,35");
        assert_eq!(format_amount(Decimal::new(5, 0)), "5,00");
    }

    #[test]
    fn test_price_display() {
        let price = Price::brl(Decimal::new(429_990, 2));
        assert_eq!(price.display(), "R$ 4.299,90");
    }

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(2990, CurrencyCode::BRL);
        assert_eq!(price.amount, Decimal::new(2990, 2));
        assert_eq!(price.to_string(), "R$ 29,90");
    }

    #[test]
    fn test_serde_amount_as_string() {
        // serde-with-str keeps decimal amounts exact in JSON
        let price = Price::brl(Decimal::new(159_990, 2));
        let json = serde_json::to_string(&price).unwrap();
        assert!(json.contains("\"1599.90\""));

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
