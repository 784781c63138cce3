//! Checkout form data and input mask helpers.
//!
//! The forms hold whatever the UI collected; the only hard validation gate
//! in the wizard is the terms agreement (and the CEP digit count inside the
//! lookup stub). The mask helpers mirror the input formatting the UI applies
//! on every keystroke.

use serde::{Deserialize, Serialize};

/// Brazilian state (UF) codes for the address form select.
pub const BR_STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Delivery address fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressForm {
    pub cep: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    pub state: String,
}

/// Payment method selected on step two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Credit,
    Debit,
    Pix,
    Boleto,
}

impl PaymentMethod {
    /// Every method, in the order the UI lists them.
    pub const ALL: [Self; 4] = [Self::Credit, Self::Debit, Self::Pix, Self::Boleto];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Credit => "Credit card",
            Self::Debit => "Debit card",
            Self::Pix => "Pix",
            Self::Boleto => "Boleto",
        }
    }

    /// Whether this method collects card details.
    #[must_use]
    pub const fn uses_card(self) -> bool {
        matches!(self, Self::Credit | Self::Debit)
    }

    /// Parse from the query-string form; unknown values fall back to credit.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "debit" => Self::Debit,
            "pix" => Self::Pix,
            "boleto" => Self::Boleto,
            _ => Self::Credit,
        }
    }
}

/// Payment fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card_number: String,
    pub card_name: String,
    pub card_expiry: String,
    pub card_cvv: String,
}

impl PaymentForm {
    /// Last four digits of the card number, for the review summary.
    #[must_use]
    pub fn card_last4(&self) -> Option<String> {
        let digit_count = self.card_number.chars().filter(char::is_ascii_digit).count();
        if digit_count < 4 {
            return None;
        }
        let last4: String = self
            .card_number
            .chars()
            .filter(char::is_ascii_digit)
            .skip(digit_count - 4)
            .collect();
        Some(last4)
    }
}

/// Keep only ASCII digits, capped at `max` characters.
fn digits(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Mask a CEP as `#####-###`.
#[must_use]
pub fn format_cep(input: &str) -> String {
    let d = digits(input, 8);
    if d.len() > 5 {
        let (head, tail) = d.split_at(5);
        format!("{head}-{tail}")
    } else {
        d
    }
}

/// Mask a card number into groups of four, up to 16 digits.
#[must_use]
pub fn format_card_number(input: &str) -> String {
    let d = digits(input, 16);
    let mut out = String::with_capacity(d.len() + 3);
    for (i, c) in d.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Mask a card expiry as `MM/AA`.
#[must_use]
pub fn format_expiry(input: &str) -> String {
    let d = digits(input, 4);
    if d.len() > 2 {
        let (month, year) = d.split_at(2);
        format!("{month}/{year}")
    } else {
        d
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("01310100"), "01310-100");
        assert_eq!(format_cep("01310"), "01310");
        assert_eq!(format_cep("013"), "013");
        assert_eq!(format_cep("01310-100"), "01310-100");
        // extra digits are dropped
        assert_eq!(format_cep("013101009999"), "01310-100");
        assert_eq!(format_cep("abc"), "");
    }

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111 1111 11"), "4111 1111 11");
        assert_eq!(format_card_number("41111111111111119999"), "4111 1111 1111 1111");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("1227"), "12/27");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12/27"), "12/27");
    }

    #[test]
    fn test_card_last4() {
        let mut form = PaymentForm {
            card_number: "4111 1111 1111 1234".to_string(),
            ..PaymentForm::default()
        };
        assert_eq!(form.card_last4().unwrap(), "1234");

        form.card_number = "411".to_string();
        assert!(form.card_last4().is_none());
    }

    #[test]
    fn test_payment_method_card_usage() {
        assert!(PaymentMethod::Credit.uses_card());
        assert!(PaymentMethod::Debit.uses_card());
        assert!(!PaymentMethod::Pix.uses_card());
        assert!(!PaymentMethod::Boleto.uses_card());
    }
}
