//! Durable key-value storage port for shopping state.
//!
//! The container persists the cart and wishlist through this port after
//! every mutation, the way a browser storefront leans on localStorage.
//! Implementations deal in raw JSON strings; (de)serialization stays with
//! the caller so a backend swap never touches the data format.
//!
//! Failure policy (see `crate::error`): the store container swallows every
//! error this port returns. A broken backend degrades the session to
//! in-memory-only state, it never breaks shopping.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

/// Storage key for the serialized cart.
pub const CART_STORAGE_KEY: &str = "techpulse_cart";

/// Storage key for the serialized wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "techpulse_wishlist";

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend is unusable (poisoned lock, injected test failure).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable local key-value storage.
pub trait StoragePort: Send + Sync {
    /// Read the raw value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one `<key>.json` file per key under a directory.
///
/// The directory is created on first write, so a fresh profile needs no
/// setup step.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backend rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoragePort for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        std::fs::write(&path, value)?;
        debug!(key, path = %path.display(), "persisted collection");
        Ok(())
    }
}

/// In-memory storage backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with raw values.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A backend whose every operation fails; exercises the silent-degradation
/// path in tests.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl StoragePort for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("injected failure".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("injected failure".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.read("missing").unwrap().is_none());

        storage.write("k", "[1,2,3]").unwrap();
        assert_eq!(storage.read("k").unwrap().unwrap(), "[1,2,3]");

        storage.write("k", "[]").unwrap();
        assert_eq!(storage.read("k").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("state"));

        // absent key reads as None, even before the directory exists
        assert!(storage.read(CART_STORAGE_KEY).unwrap().is_none());

        storage.write(CART_STORAGE_KEY, "[]").unwrap();
        assert_eq!(storage.read(CART_STORAGE_KEY).unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_file_storage_separate_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.write(CART_STORAGE_KEY, "[\"cart\"]").unwrap();
        storage.write(WISHLIST_STORAGE_KEY, "[\"wish\"]").unwrap();

        assert_eq!(storage.read(CART_STORAGE_KEY).unwrap().unwrap(), "[\"cart\"]");
        assert_eq!(
            storage.read(WISHLIST_STORAGE_KEY).unwrap().unwrap(),
            "[\"wish\"]"
        );
    }

    #[test]
    fn test_failing_storage_fails() {
        let storage = FailingStorage;
        assert!(storage.read("k").is_err());
        assert!(storage.write("k", "v").is_err());
    }
}
