//! Catalog entity types.
//!
//! Products and categories are immutable reference data: created when the
//! dataset is loaded and never mutated by the core. Prices use `Decimal`
//! (serialized as strings) so money never rounds through floating point.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use techpulse_core::{CategorySlug, ProductId};

/// A catalog entry with pricing, stock, and descriptive attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Current selling price.
    pub price: Decimal,
    /// Pre-discount price shown struck through.
    pub original_price: Decimal,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount: u8,
    /// Average review rating, 0.0-5.0.
    pub rating: f32,
    /// Review count; relevance ordering sorts on this.
    pub reviews: u32,
    /// Category display name.
    pub category: String,
    pub category_slug: CategorySlug,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub in_stock: bool,
    /// Technical specifications, key to value.
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    pub description: String,
    pub short_description: String,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// The first image, used on cards and cart rows.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive substring match against name, brand, category, tags,
    /// and the short description. `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.brand.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || self.short_description.to_lowercase().contains(needle)
    }
}

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: CategorySlug,
    #[serde(default)]
    pub image: Option<String>,
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::test_support::product;

    #[test]
    fn test_matches_text_fields() {
        let mut p = product("p1", "Notebook XPS 15", 8999);
        p.brand = "Dell".to_string();
        p.tags = vec!["ultrabook".to_string()];
        p.short_description = "Tela InfinityEdge".to_string();

        assert!(p.matches_text("note"));
        assert!(p.matches_text("dell"));
        assert!(p.matches_text("ultra"));
        assert!(p.matches_text("infinityedge"));
        assert!(!p.matches_text("zzz"));
    }
}
