//! Integration tests for the TechPulse storefront core.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p techpulse-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_persistence` - Cart/wishlist durability across sessions
//! - `checkout_flow` - Full wizard scenarios, end to end
//! - `catalog_query` - Listing, search, and suggestion scenarios over the
//!   built-in dataset
//!
//! The helpers here stand up a whole storefront session against a
//! throwaway storage directory, the closest thing this core has to a
//! running server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use tempfile::TempDir;

use techpulse_storefront::{Catalog, Session, StorefrontConfig, StorefrontContext};

/// A storefront session wired against a temporary storage directory.
///
/// The directory lives as long as the context, so reopening a session
/// against the same context exercises the persistence round trip.
pub struct TestContext {
    context: StorefrontContext,
    // Held for its Drop: deletes the storage directory when the test ends.
    _storage_dir: TempDir,
}

impl TestContext {
    /// Stand up a context with the built-in catalog, a fast submit delay,
    /// and a fresh storage directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let storage_dir = TempDir::new().expect("failed to create temp storage dir");
        let config = StorefrontConfig {
            storage_dir: storage_dir.path().to_path_buf(),
            submit_delay: Duration::from_millis(10),
            ..StorefrontConfig::default()
        };
        let context = StorefrontContext::with_catalog(config, Catalog::builtin());
        Self {
            context,
            _storage_dir: storage_dir,
        }
    }

    /// The shared context.
    #[must_use]
    pub fn context(&self) -> StorefrontContext {
        self.context.clone()
    }

    /// Open a session against the test storage directory.
    #[must_use]
    pub fn open_session(&self) -> Session {
        Session::open(self.context.clone())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
