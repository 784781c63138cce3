//! The pure catalog query layer: filter, sort, paginate.
//!
//! Queries are plain values; running one derives a result page from the
//! product list without touching any state. Results are recomputed on every
//! input change rather than cached - the dataset is small and the derivation
//! is cheap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Product;

/// Products shown per result page.
pub const PAGE_SIZE: usize = 12;

/// Pseudo-slug that selects every category.
pub const ALL_PRODUCTS_SLUG: &str = "todos";

/// Sort order for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Review count descending (the storefront's notion of relevance).
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    /// Rating descending.
    Rating,
    /// Discount percentage descending.
    Discount,
}

impl SortKey {
    /// Parse from the query-string form; unknown values fall back to
    /// relevance.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "rating" => Self::Rating,
            "discount" => Self::Discount,
            _ => Self::Relevance,
        }
    }

    /// Query-string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
            Self::Discount => "discount",
        }
    }

    /// Human-readable label for the sort dropdown.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Relevance => "Most relevant",
            Self::PriceAsc => "Lowest price",
            Self::PriceDesc => "Highest price",
            Self::Rating => "Best rated",
            Self::Discount => "Biggest discount",
        }
    }
}

/// Filter, sort, and pagination parameters for a catalog listing.
///
/// Every filter mutator resets the page back to 1 so a narrowed result set
/// never opens on a page that no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    category_slug: Option<String>,
    text: Option<String>,
    brands: Vec<String>,
    min_rating: Option<f32>,
    in_stock_only: bool,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    sort: SortKey,
    page: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductQuery {
    /// A query over every product, relevance-sorted, page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            category_slug: None,
            text: None,
            brands: Vec::new(),
            min_rating: None,
            in_stock_only: false,
            min_price: None,
            max_price: None,
            sort: SortKey::Relevance,
            page: 1,
        }
    }

    /// Restrict to a category slug. The `"todos"` slug (or `None`) selects
    /// the full set.
    #[must_use]
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self.page = 1;
        self
    }

    /// Free-text search across name, brand, category, tags, and short
    /// description.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self.page = 1;
        self
    }

    /// Add a brand to the brand filter (selected brands are OR'd together,
    /// the filter as a whole ANDs with the rest).
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self.page = 1;
        self
    }

    /// Keep only products rated at or above `rating`.
    #[must_use]
    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self.page = 1;
        self
    }

    /// Keep only in-stock products.
    #[must_use]
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self.page = 1;
        self
    }

    /// Keep only products priced within `[min, max]` inclusive.
    #[must_use]
    pub fn with_price_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self.page = 1;
        self
    }

    /// Change the sort order (also resets to page 1, matching the listing
    /// UI).
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self.page = 1;
        self
    }

    /// Jump to a result page (1-based).
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Current sort order.
    #[must_use]
    pub const fn sort(&self) -> SortKey {
        self.sort
    }

    fn accepts(&self, product: &Product) -> bool {
        if let Some(slug) = &self.category_slug
            && slug != ALL_PRODUCTS_SLUG
            && product.category_slug.as_str() != slug
        {
            return false;
        }

        if let Some(text) = &self.text {
            let needle = text.trim().to_lowercase();
            if !needle.is_empty() && !product.matches_text(&needle) {
                return false;
            }
        }

        if !self.brands.is_empty() && !self.brands.iter().any(|b| *b == product.brand) {
            return false;
        }

        if let Some(min_rating) = self.min_rating
            && product.rating < min_rating
        {
            return false;
        }

        if self.in_stock_only && !product.in_stock {
            return false;
        }

        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }

        true
    }
}

/// One page of catalog results.
#[derive(Debug, Clone)]
pub struct QueryResults {
    /// Products on the requested page, in sorted order.
    pub products: Vec<Product>,
    /// Total matches across all pages.
    pub total_count: usize,
    /// The page these results are for (1-based).
    pub page: usize,
    /// Number of pages available.
    pub total_pages: usize,
}

impl QueryResults {
    /// Whether a later page exists.
    #[must_use]
    pub const fn has_more_pages(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Run a query against the product list.
///
/// Filters compose conjunctively, the sort is stable (ties keep the source
/// array's order), and the result is cut to a fixed page size.
pub(crate) fn run(products: &[Product], query: &ProductQuery) -> QueryResults {
    let mut matched: Vec<&Product> = products.iter().filter(|p| query.accepts(p)).collect();

    match query.sort {
        SortKey::Relevance => matched.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        SortKey::PriceAsc => matched.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => matched.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Discount => matched.sort_by(|a, b| b.discount.cmp(&a.discount)),
    }

    let total_count = matched.len();
    let total_pages = total_count.div_ceil(PAGE_SIZE).max(1);
    let start = query.page.saturating_sub(1).saturating_mul(PAGE_SIZE);

    let products: Vec<Product> = matched
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    QueryResults {
        products,
        total_count,
        page: query.page,
        total_pages,
    }
}
