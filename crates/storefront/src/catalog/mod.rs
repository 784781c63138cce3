//! Product catalog: the static dataset and the pure query layer over it.
//!
//! The catalog is read-only reference data. It ships embedded in the binary
//! (see [`Catalog::builtin`]) and can be overridden with a JSON file for
//! seasonal assortments. All listing, search, and recommendation surfaces
//! derive from the same in-memory product list.

mod query;
mod suggest;
mod types;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use techpulse_core::ProductId;

use crate::error::StorefrontError;

pub use query::{ALL_PRODUCTS_SLUG, PAGE_SIZE, ProductQuery, QueryResults, SortKey};
pub use suggest::Suggestion;
pub use types::{Category, Product};

/// Products shown in the home page "featured" rail.
const FEATURED_LIMIT: usize = 8;

/// Products shown in the "best deals" rail.
const DEALS_LIMIT: usize = 4;

/// Related products shown under a product page.
const RELATED_LIMIT: usize = 4;

/// Embedded default dataset.
const BUILTIN_DATA: &str = include_str!("../../data/catalog.json");

/// Errors loading the catalog dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk / embedded dataset shape.
#[derive(Debug, serde::Deserialize)]
struct CatalogData {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// The immutable product catalog.
///
/// Holds every product and category plus an id index for O(1) product
/// lookup. Source order of the product list is significant: it is the
/// tie-break order for every sort.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from already-loaded records.
    #[must_use]
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self {
            products,
            categories,
            by_id,
        }
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Ok(Self::new(data.categories, data.products))
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The embedded default dataset.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON is malformed, which is a build defect;
    /// the dataset is validated by unit tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_DATA).expect("embedded catalog dataset is valid")
    }

    /// All products in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&i| self.products.get(i))
    }

    /// Look up a product by id, converting a miss into the not-found error
    /// the navigation layer renders.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::NotFound` for an unknown id.
    pub fn require(&self, id: &ProductId) -> Result<&Product, StorefrontError> {
        self.product(id)
            .ok_or_else(|| StorefrontError::NotFound(format!("product {id}")))
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug.as_str() == slug)
    }

    /// Distinct brand names, sorted, for the filter sidebar.
    #[must_use]
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = self.products.iter().map(|p| p.brand.clone()).collect();
        brands.sort();
        brands.dedup();
        brands
    }

    /// Featured products for the home page rail.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Highest-discount products for the deals rail.
    #[must_use]
    pub fn best_deals(&self) -> Vec<&Product> {
        let mut deals: Vec<&Product> = self.products.iter().collect();
        deals.sort_by(|a, b| b.discount.cmp(&a.discount));
        deals.truncate(DEALS_LIMIT);
        deals
    }

    /// Products from the same category, excluding the product itself.
    #[must_use]
    pub fn related(&self, id: &ProductId) -> Vec<&Product> {
        let Some(product) = self.product(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category_slug == product.category_slug && p.id != *id)
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Run a filtered/sorted/paginated listing query.
    #[must_use]
    pub fn search(&self, query: &ProductQuery) -> QueryResults {
        query::run(&self.products, query)
    }

    /// Build autocomplete suggestions for a partial query.
    #[must_use]
    pub fn suggest(&self, partial: &str) -> Vec<Suggestion> {
        suggest::run(&self.categories, &self.products, partial)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_parses() {
        let catalog = Catalog::builtin();
        assert!(!catalog.products().is_empty());
        assert!(!catalog.categories().is_empty());
    }

    #[test]
    fn test_builtin_dataset_ids_unique() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_id.len(), catalog.products().len());
    }

    #[test]
    fn test_builtin_categories_cover_products() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            assert!(
                catalog.category(product.category_slug.as_str()).is_some(),
                "product {} references unknown category {}",
                product.id,
                product.category_slug
            );
        }
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::builtin();
        let first = catalog.products().first().unwrap().clone();
        assert_eq!(catalog.product(&first.id).unwrap().id, first.id);
        assert!(catalog.product(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_require_unknown_id_is_not_found() {
        let catalog = Catalog::builtin();
        let err = catalog.require(&ProductId::new("p999")).unwrap_err();
        assert!(matches!(err, StorefrontError::NotFound(_)));
    }

    #[test]
    fn test_search_finds_dell_notebook() {
        let catalog = Catalog::builtin();
        let results = catalog.search(&ProductQuery::new().with_text("note"));
        assert!(
            results
                .products
                .iter()
                .any(|p| p.name.contains("XPS") && p.brand == "Dell")
        );

        let none = catalog.search(&ProductQuery::new().with_text("zzz"));
        assert_eq!(none.total_count, 0);
    }

    #[test]
    fn test_related_same_category_excludes_self() {
        let catalog = Catalog::builtin();
        let product = catalog.products().first().unwrap().clone();
        let related = catalog.related(&product.id);
        assert!(related.len() <= RELATED_LIMIT);
        for other in related {
            assert_eq!(other.category_slug, product.category_slug);
            assert_ne!(other.id, product.id);
        }
    }

    #[test]
    fn test_featured_and_deals_limits() {
        let catalog = Catalog::builtin();
        assert!(catalog.featured().len() <= FEATURED_LIMIT);
        assert!(catalog.featured().iter().all(|p| p.featured));

        let deals = catalog.best_deals();
        assert_eq!(deals.len(), DEALS_LIMIT);
        // top of the list has the steepest discount
        let max_discount = catalog.products().iter().map(|p| p.discount).max().unwrap();
        assert_eq!(deals.first().unwrap().discount, max_discount);
    }

    #[test]
    fn test_brands_sorted_distinct() {
        let catalog = Catalog::builtin();
        let brands = catalog.brands();
        let mut sorted = brands.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(brands, sorted);
        assert!(brands.iter().any(|b| b == "Dell"));
    }
}
