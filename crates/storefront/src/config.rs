//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront runs with defaults out of the
//! box.
//!
//! - `TECHPULSE_STORAGE_DIR` - Directory for durable cart/wishlist storage
//!   (default: `.techpulse`)
//! - `TECHPULSE_BASE_URL` - Public URL used to build product share links
//!   (default: `https://loja.techpulse.com.br`)
//! - `TECHPULSE_CATALOG_FILE` - Path to a catalog JSON file overriding the
//!   built-in dataset
//! - `TECHPULSE_SUBMIT_DELAY_MS` - Simulated order-processing delay in
//!   milliseconds (default: 1500)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default directory for the JSON file storage backend.
const DEFAULT_STORAGE_DIR: &str = ".techpulse";

/// Default public base URL for share links.
const DEFAULT_BASE_URL: &str = "https://loja.techpulse.com.br";

/// Default simulated order-processing delay.
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory where the cart/wishlist JSON files live
    pub storage_dir: PathBuf,
    /// Public base URL for the storefront (share links)
    pub base_url: String,
    /// Optional catalog dataset override
    pub catalog_file: Option<PathBuf>,
    /// Simulated order-processing delay
    pub submit_delay: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir =
            PathBuf::from(get_env_or_default("TECHPULSE_STORAGE_DIR", DEFAULT_STORAGE_DIR));
        let base_url = get_env_or_default("TECHPULSE_BASE_URL", DEFAULT_BASE_URL);
        let catalog_file = get_optional_env("TECHPULSE_CATALOG_FILE").map(PathBuf::from);
        let submit_delay = parse_delay_ms(
            "TECHPULSE_SUBMIT_DELAY_MS",
            get_optional_env("TECHPULSE_SUBMIT_DELAY_MS"),
        )?;

        Ok(Self {
            storage_dir,
            base_url,
            catalog_file,
            submit_delay,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog_file: None,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a millisecond duration variable, falling back to the default when
/// the variable is absent.
fn parse_delay_ms(key: &str, value: Option<String>) -> Result<Duration, ConfigError> {
    match value {
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS)),
    }
}
