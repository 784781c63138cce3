//! Session wiring: shared context and the per-session state boundary.
//!
//! `StorefrontContext` holds what every surface shares and never mutates
//! (configuration, catalog); it is cheaply cloneable via `Arc`. `Session`
//! is the explicit construction/teardown boundary for one shopping session:
//! it owns the mutable [`StoreState`] and hands out checkout flows. There
//! are no ambient globals - a consumer without a `Session` cannot touch
//! shopping state, by construction.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::checkout::{CheckoutEntry, CheckoutFlow};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::store::{JsonFileStorage, StoragePort, StoreState};

/// Shared immutable context: configuration plus the loaded catalog.
#[derive(Clone)]
pub struct StorefrontContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl StorefrontContext {
    /// Build the context: loads the catalog from the configured override
    /// file when set, otherwise uses the embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured catalog file cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_file {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };
        Ok(Self::with_catalog(config, catalog))
    }

    /// Build the context around an already-loaded catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(ContextInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}

/// One shopping session: the owner of the mutable store state.
///
/// Opening a session loads persisted cart/wishlist state; dropping it is
/// the teardown (state is already persisted write-through, so there is
/// nothing to flush).
pub struct Session {
    context: StorefrontContext,
    store: StoreState,
}

impl Session {
    /// Open a session with file-backed storage under the configured
    /// directory.
    #[must_use]
    pub fn open(context: StorefrontContext) -> Self {
        let storage = JsonFileStorage::new(context.config().storage_dir.clone());
        Self::with_storage(context, Box::new(storage))
    }

    /// Open a session over an explicit storage backend (tests, ephemeral
    /// sessions).
    #[must_use]
    pub fn with_storage(context: StorefrontContext, storage: Box<dyn StoragePort>) -> Self {
        let store = StoreState::new(storage);
        Self { context, store }
    }

    /// Shared context.
    #[must_use]
    pub fn context(&self) -> &StorefrontContext {
        &self.context
    }

    /// The product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.context.catalog()
    }

    /// Read access to the shopping state.
    #[must_use]
    pub fn store(&self) -> &StoreState {
        &self.store
    }

    /// Mutating access to the shopping state.
    pub fn store_mut(&mut self) -> &mut StoreState {
        &mut self.store
    }

    /// Enter the checkout wizard for the current cart.
    #[must_use]
    pub fn begin_checkout(&self) -> CheckoutEntry {
        CheckoutFlow::enter(&self.store, self.context.config())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutEntry;
    use crate::store::MemoryStorage;

    fn context() -> StorefrontContext {
        StorefrontContext::with_catalog(StorefrontConfig::default(), Catalog::builtin())
    }

    #[test]
    fn test_context_is_cheaply_cloneable() {
        let ctx = context();
        let clone = ctx.clone();
        assert_eq!(
            ctx.catalog().products().len(),
            clone.catalog().products().len()
        );
    }

    #[test]
    fn test_session_checkout_entry_depends_on_cart() {
        let mut session = Session::with_storage(context(), Box::new(MemoryStorage::new()));
        assert!(matches!(session.begin_checkout(), CheckoutEntry::RedirectToCart));

        let product = session.catalog().products().first().unwrap().clone();
        session.store_mut().add_to_cart(product, 1);
        assert!(matches!(session.begin_checkout(), CheckoutEntry::Proceed(_)));
    }

    #[test]
    fn test_file_backed_session_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            storage_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        let ctx = StorefrontContext::with_catalog(config, Catalog::builtin());

        {
            let mut session = Session::open(ctx.clone());
            let product = session.catalog().products().first().unwrap().clone();
            session.store_mut().add_to_cart(product, 3);
        }

        let session = Session::open(ctx);
        assert_eq!(session.store().cart_count(), 3);
    }
}
