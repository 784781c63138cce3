//! TechPulse CLI - browse the catalog and drive a shopping session.
//!
//! # Usage
//!
//! ```bash
//! # Browse and search the catalog
//! techpulse catalog list --category notebooks --sort price-asc
//! techpulse catalog list --search "fone" --in-stock
//! techpulse catalog show p04
//! techpulse catalog suggest "note"
//!
//! # Manage the cart (persisted under TECHPULSE_STORAGE_DIR)
//! techpulse cart add p04 --quantity 2
//! techpulse cart show
//! techpulse cart update p04 --quantity 1
//!
//! # Wishlist
//! techpulse wishlist toggle p08
//!
//! # Run the checkout wizard end to end
//! techpulse checkout --cep 01310-100 --method pix --coupon TECHPULSE10 --agree
//! ```
//!
//! # Commands
//!
//! - `catalog` - List, search, inspect, and autocomplete products
//! - `cart` - Mutate and inspect the persisted cart
//! - `wishlist` - Toggle and inspect the persisted wishlist
//! - `checkout` - Simulate the full checkout flow for the current cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use techpulse_storefront::{Session, StorefrontConfig, StorefrontContext};

mod commands;

#[derive(Parser)]
#[command(name = "techpulse")]
#[command(author, version, about = "TechPulse storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and search the product catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Inspect and mutate the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Inspect and toggle the wishlist
    Wishlist {
        #[command(subcommand)]
        action: commands::cart::WishlistAction,
    },
    /// Run the checkout wizard for the current cart
    Checkout(commands::checkout::CheckoutArgs),
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "techpulse=info,techpulse_storefront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let context = StorefrontContext::new(config)?;

    match cli.command {
        Commands::Catalog { action } => commands::catalog::run(&context, &action)?,
        Commands::Cart { action } => {
            let mut session = Session::open(context);
            commands::cart::run_cart(&mut session, &action)?;
        }
        Commands::Wishlist { action } => {
            let mut session = Session::open(context);
            commands::cart::run_wishlist(&mut session, &action)?;
        }
        Commands::Checkout(args) => {
            let mut session = Session::open(context);
            commands::checkout::run(&mut session, args).await?;
        }
    }
    Ok(())
}
