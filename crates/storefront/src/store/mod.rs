//! The shopping state container: cart and wishlist.
//!
//! `StoreState` is the single owner of the cart and wishlist collections.
//! Consumers read through its query methods and mutate only through its
//! operations - never by reaching into the collections. Every mutation
//! persists the affected collection through the [`StoragePort`], and
//! totals/counts are derived on each read rather than cached.
//!
//! The container is an explicitly constructed value handed to whatever
//! session owns it (see [`crate::state::Session`]); there is no ambient
//! global instance.

pub mod storage;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use techpulse_core::ProductId;

use crate::catalog::Product;

pub use storage::{
    CART_STORAGE_KEY, FailingStorage, JsonFileStorage, MemoryStorage, StorageError, StoragePort,
    WISHLIST_STORAGE_KEY,
};

/// One cart line: a product snapshot and how many of it.
///
/// Invariant: the cart holds at most one `CartItem` per product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Line total: price x quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Cart and wishlist state with write-through persistence.
pub struct StoreState {
    cart: Vec<CartItem>,
    wishlist: Vec<Product>,
    storage: Box<dyn StoragePort>,
}

impl StoreState {
    /// Create a container backed by `storage`, loading any previously
    /// persisted collections. A missing, malformed, or unreadable entry
    /// silently falls back to an empty collection.
    #[must_use]
    pub fn new(storage: Box<dyn StoragePort>) -> Self {
        let cart = load_collection(storage.as_ref(), CART_STORAGE_KEY);
        let wishlist = load_collection(storage.as_ref(), WISHLIST_STORAGE_KEY);
        debug!(
            cart_lines = cart.len(),
            wishlist_entries = wishlist.len(),
            "store state loaded"
        );
        Self {
            cart,
            wishlist,
            storage,
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `quantity` of `product` to the cart. If the product is already
    /// present the existing line's quantity is incremented; otherwise a new
    /// line is appended. Quantity is not validated here - callers pass what
    /// the UI collected.
    pub fn add_to_cart(&mut self, product: Product, quantity: u32) {
        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
        } else {
            self.cart.push(CartItem { product, quantity });
        }
        self.persist_cart();
    }

    /// Remove the line for `product_id`. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.retain(|i| i.product.id != *product_id);
        self.persist_cart();
    }

    /// Set the quantity for `product_id` exactly (not additive). A quantity
    /// of zero removes the line, same as [`Self::remove_from_cart`].
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == *product_id) {
            item.quantity = quantity;
        }
        self.persist_cart();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_cart();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Whether the cart holds a line for `product_id`.
    #[must_use]
    pub fn is_in_cart(&self, product_id: &ProductId) -> bool {
        self.cart.iter().any(|i| i.product.id == *product_id)
    }

    /// Sum of price x quantity over all lines. Recomputed per read.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|i| i.quantity).sum()
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Add `product` to the wishlist, or remove it when already present.
    /// Returns `true` when the product was added.
    pub fn toggle_wishlist(&mut self, product: Product) -> bool {
        let added = if self.wishlist.iter().any(|p| p.id == product.id) {
            self.wishlist.retain(|p| p.id != product.id);
            false
        } else {
            self.wishlist.push(product);
            true
        };
        self.persist_wishlist();
        added
    }

    /// Whether `product_id` is on the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.iter().any(|p| p.id == *product_id)
    }

    /// Wishlist entries in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    /// Number of wishlist entries.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_cart(&self) {
        persist(self.storage.as_ref(), CART_STORAGE_KEY, &self.cart);
    }

    fn persist_wishlist(&self) {
        persist(self.storage.as_ref(), WISHLIST_STORAGE_KEY, &self.wishlist);
    }
}

impl std::fmt::Debug for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreState")
            .field("cart_lines", &self.cart.len())
            .field("wishlist_entries", &self.wishlist.len())
            .finish_non_exhaustive()
    }
}

/// Load a persisted collection, falling back to empty on any failure.
fn load_collection<T: DeserializeOwned>(storage: &dyn StoragePort, key: &str) -> Vec<T> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read persisted collection, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "persisted collection is malformed, starting empty");
            Vec::new()
        }
    }
}

/// Persist a collection, swallowing failures - a broken backend degrades the
/// session to in-memory state.
fn persist<T: Serialize>(storage: &dyn StoragePort, key: &str, items: &[T]) {
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            warn!(key, error = %e, "failed to serialize collection, skipping persist");
            return;
        }
    };
    if let Err(e) = storage.write(key, &json) {
        warn!(key, error = %e, "failed to persist collection, keeping in-memory state");
    }
}
