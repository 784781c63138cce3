//! Autocomplete suggestions for the header search box.
//!
//! Matching is the same case-insensitive substring logic as the full query
//! layer, but the result is a small mixed list: matching categories first,
//! then a capped number of products, then a "search for ..." entry that
//! hands the raw query off to the full results page.

use rust_decimal::Decimal;
use techpulse_core::{CategorySlug, ProductId};

use super::types::{Category, Product};

/// Maximum product entries in the dropdown.
const PRODUCT_LIMIT: usize = 6;

/// One entry in the autocomplete dropdown.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    /// Jump straight to a category listing.
    Category {
        name: String,
        slug: CategorySlug,
        image: Option<String>,
    },
    /// Jump straight to a product page.
    Product {
        id: ProductId,
        name: String,
        price: Decimal,
        category: String,
        image: Option<String>,
    },
    /// Run the raw query against the full results page.
    Query(String),
}

/// Build the suggestion list for a partial query.
///
/// An empty or whitespace-only query yields nothing; the raw-query entry is
/// appended only when at least one category or product matched.
pub(crate) fn run(categories: &[Category], products: &[Product], query: &str) -> Vec<Suggestion> {
    let trimmed = query.trim();
    let needle = trimmed.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<Suggestion> = Vec::new();

    for category in categories {
        if category.name.to_lowercase().contains(&needle) {
            results.push(Suggestion::Category {
                name: category.name.clone(),
                slug: category.slug.clone(),
                image: category.image.clone(),
            });
        }
    }

    for product in products.iter().filter(|p| p.matches_text(&needle)).take(PRODUCT_LIMIT) {
        results.push(Suggestion::Product {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.primary_image().map(ToOwned::to_owned),
        });
    }

    if !results.is_empty() {
        results.push(Suggestion::Query(trimmed.to_owned()));
    }

    results
}
