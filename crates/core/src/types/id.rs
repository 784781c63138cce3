//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog entities are
//! keyed by opaque strings (e.g., `"p04"` for a product), so the wrappers
//! hold a `String` rather than an integer.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use techpulse_core::define_id;
/// define_id!(ProductId);
/// define_id!(CategorySlug);
///
/// let product_id = ProductId::new("p01");
/// let slug = CategorySlug::new("notebooks");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = slug;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(CategorySlug);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip() {
        let id = ProductId::new("p01");
        assert_eq!(id.as_str(), "p01");
        assert_eq!(id.to_string(), "p01");
        assert_eq!(id, "p01");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("p16");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p16\"");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_from_conversions() {
        let a: ProductId = "p02".into();
        let b = ProductId::from("p02".to_string());
        assert_eq!(a, b);

        let raw: String = a.into();
        assert_eq!(raw, "p02");
    }
}
