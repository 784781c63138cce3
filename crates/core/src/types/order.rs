//! Order number generation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix for every TechPulse order number.
const ORDER_PREFIX: &str = "TP";

/// Length of the random portion of an order number.
const ORDER_SUFFIX_LEN: usize = 6;

/// A human-readable order reference, e.g. `TP-3F9A2C`.
///
/// Order numbers are generated client-side when a simulated order completes;
/// they are display references, not database keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generate a fresh order number from random UUID bytes.
    #[must_use]
    pub fn generate() -> Self {
        let raw = Uuid::new_v4().simple().to_string().to_uppercase();
        let suffix: String = raw.chars().take(ORDER_SUFFIX_LEN).collect();
        Self(format!("{ORDER_PREFIX}-{suffix}"))
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let number = OrderNumber::generate();
        let s = number.as_str();
        assert!(s.starts_with("TP-"));
        let suffix = s.strip_prefix("TP-").unwrap();
        assert_eq!(suffix.len(), ORDER_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_unique() {
        let a = OrderNumber::generate();
        let b = OrderNumber::generate();
        assert_ne!(a, b);
    }
}
