//! Stubbed CEP (postal code) lookup.
//!
//! Stands in for the external address-lookup service: any input carrying at
//! least 8 digits resolves synchronously to fixed placeholder fields;
//! anything shorter is rejected. The real service is an external
//! collaborator the core never calls.

use tracing::debug;

use crate::error::ValidationError;

/// Digits a CEP must carry to resolve.
const CEP_DIGITS: usize = 8;

/// Resolved address fields for a CEP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CepLookup {
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
}

/// Resolve a CEP to address fields.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCep` when the input has fewer than 8
/// digits.
pub fn lookup_cep(input: &str) -> Result<CepLookup, ValidationError> {
    let digit_count = input.chars().filter(char::is_ascii_digit).count();
    if digit_count < CEP_DIGITS {
        return Err(ValidationError::InvalidCep);
    }

    debug!(cep = input, "CEP resolved to placeholder address");
    Ok(CepLookup {
        street: "Rua Augusta".to_string(),
        district: "Consolacao".to_string(),
        city: "Sao Paulo".to_string(),
        state: "SP".to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_with_eight_digits() {
        let lookup = lookup_cep("01310-100").unwrap();
        assert_eq!(lookup.street, "Rua Augusta");
        assert_eq!(lookup.city, "Sao Paulo");
        assert_eq!(lookup.state, "SP");
    }

    #[test]
    fn test_lookup_unmasked_input() {
        assert!(lookup_cep("01310100").is_ok());
    }

    #[test]
    fn test_lookup_too_short() {
        assert_eq!(lookup_cep("0131").unwrap_err(), ValidationError::InvalidCep);
        assert_eq!(lookup_cep("").unwrap_err(), ValidationError::InvalidCep);
        assert_eq!(lookup_cep("abcdefgh").unwrap_err(), ValidationError::InvalidCep);
    }
}
