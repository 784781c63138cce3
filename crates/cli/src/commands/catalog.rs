//! Catalog browsing commands.

use clap::Subcommand;
use rust_decimal::Decimal;
use tracing::info;

use techpulse_core::ProductId;
use techpulse_storefront::catalog::Suggestion;
use techpulse_storefront::pricing::format_brl;
use techpulse_storefront::share::product_link;
use techpulse_storefront::{ProductQuery, SortKey, StorefrontContext};

/// Catalog subcommands.
#[derive(Subcommand)]
pub enum CatalogAction {
    /// List products with filters, sorting, and pagination
    List {
        /// Category slug ("todos" for everything)
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text search query
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to one or more brands
        #[arg(short, long)]
        brand: Vec<String>,

        /// Minimum rating (0-5)
        #[arg(long)]
        min_rating: Option<f32>,

        /// Only in-stock products
        #[arg(long)]
        in_stock: bool,

        /// Minimum price in BRL
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum price in BRL
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Sort order: relevance, price-asc, price-desc, rating, discount
        #[arg(long, default_value = "relevance")]
        sort: String,

        /// Result page (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show one product in full, with related products and share link
    Show {
        /// Product id (e.g. p04)
        id: String,
    },
    /// Autocomplete suggestions for a partial query
    Suggest {
        /// Partial search query
        query: String,
    },
}

/// Run a catalog subcommand.
pub fn run(
    context: &StorefrontContext,
    action: &CatalogAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::List {
            category,
            search,
            brand,
            min_rating,
            in_stock,
            min_price,
            max_price,
            sort,
            page,
        } => {
            let mut query = ProductQuery::new().with_sort(SortKey::parse(sort));
            if let Some(slug) = category {
                query = query.with_category(slug.clone());
            }
            if let Some(text) = search {
                query = query.with_text(text.clone());
            }
            for b in brand {
                query = query.with_brand(b.clone());
            }
            if let Some(rating) = min_rating {
                query = query.with_min_rating(*rating);
            }
            if *in_stock {
                query = query.in_stock_only();
            }
            if min_price.is_some() || max_price.is_some() {
                query = query.with_price_range(
                    min_price.unwrap_or(Decimal::ZERO),
                    max_price.unwrap_or(Decimal::MAX),
                );
            }
            query = query.with_page(*page);

            let results = context.catalog().search(&query);
            info!(
                "{} products found (page {}/{})",
                results.total_count, results.page, results.total_pages
            );
            for product in &results.products {
                let stock = if product.in_stock { "" } else { "  [out of stock]" };
                info!(
                    "  {}  {}  {}  {} ({} reviews){stock}",
                    product.id,
                    product.name,
                    format_brl(product.price),
                    product.rating,
                    product.reviews
                );
            }
        }
        CatalogAction::Show { id } => {
            let product_id = ProductId::new(id.clone());
            let product = context.catalog().require(&product_id)?;

            info!("{} - {}", product.brand, product.name);
            info!(
                "  {} (was {}, -{}%)",
                format_brl(product.price),
                format_brl(product.original_price),
                product.discount
            );
            info!("  {} stars, {} reviews", product.rating, product.reviews);
            info!("  {}", product.short_description);
            for (key, value) in &product.specs {
                info!("  {key}: {value}");
            }

            let related = context.catalog().related(&product_id);
            if !related.is_empty() {
                info!("Related:");
                for r in related {
                    info!("  {}  {}  {}", r.id, r.name, format_brl(r.price));
                }
            }

            let link = product_link(&context.config().base_url, product)?;
            info!("Share: {link}");
        }
        CatalogAction::Suggest { query } => {
            for suggestion in context.catalog().suggest(query) {
                match suggestion {
                    Suggestion::Category { name, slug, .. } => {
                        info!("  category  {name} ({slug})");
                    }
                    Suggestion::Product { id, name, price, .. } => {
                        info!("  product   {id}  {name}  {}", format_brl(price));
                    }
                    Suggestion::Query(raw) => info!("  search    \"{raw}\""),
                }
            }
        }
    }
    Ok(())
}
