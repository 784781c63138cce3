//! Cart and wishlist commands.
//!
//! These mutate the session's persisted state, so changes survive across
//! invocations the same way a browser storefront survives a reload.

use clap::Subcommand;
use tracing::info;

use techpulse_core::ProductId;
use techpulse_storefront::Session;
use techpulse_storefront::pricing::format_brl;

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id (e.g. p04)
        id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity exactly (0 removes it)
    Update {
        /// Product id
        id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
}

/// Wishlist subcommands.
#[derive(Subcommand)]
pub enum WishlistAction {
    /// Show wishlist entries
    Show,
    /// Add a product to the wishlist, or remove it if already there
    Toggle {
        /// Product id
        id: String,
    },
}

/// Run a cart subcommand.
pub fn run_cart(
    session: &mut Session,
    action: &CartAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CartAction::Show => {
            show_cart(session);
        }
        CartAction::Add { id, quantity } => {
            let product_id = ProductId::new(id.clone());
            let product = session.catalog().require(&product_id)?.clone();
            let name = product.name.clone();
            session.store_mut().add_to_cart(product, *quantity);
            info!("Added {quantity}x {name} to the cart");
            show_cart(session);
        }
        CartAction::Update { id, quantity } => {
            let product_id = ProductId::new(id.clone());
            session.store_mut().update_quantity(&product_id, *quantity);
            show_cart(session);
        }
        CartAction::Remove { id } => {
            let product_id = ProductId::new(id.clone());
            session.store_mut().remove_from_cart(&product_id);
            show_cart(session);
        }
        CartAction::Clear => {
            session.store_mut().clear_cart();
            info!("Cart cleared");
        }
    }
    Ok(())
}

/// Run a wishlist subcommand.
pub fn run_wishlist(
    session: &mut Session,
    action: &WishlistAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        WishlistAction::Show => {
            let store = session.store();
            info!("Wishlist ({} items)", store.wishlist_count());
            for product in store.wishlist() {
                info!("  {}  {}  {}", product.id, product.name, format_brl(product.price));
            }
        }
        WishlistAction::Toggle { id } => {
            let product_id = ProductId::new(id.clone());
            let product = session.catalog().require(&product_id)?.clone();
            let name = product.name.clone();
            if session.store_mut().toggle_wishlist(product) {
                info!("Added {name} to the wishlist");
            } else {
                info!("Removed {name} from the wishlist");
            }
        }
    }
    Ok(())
}

fn show_cart(session: &Session) {
    let store = session.store();
    if store.cart().is_empty() {
        info!("Cart is empty");
        return;
    }
    info!("Cart ({} items)", store.cart_count());
    for item in store.cart() {
        info!(
            "  {}  {}  {}x {} = {}",
            item.product.id,
            item.product.name,
            item.quantity,
            format_brl(item.product.price),
            format_brl(item.line_total())
        );
    }
    info!("Subtotal: {}", format_brl(store.cart_total()));
}
