//! Durable local key-value storage.
//!
//! One JSON document per key under a state directory (`identity.json`,
//! `cart.json`). Reads treat corrupt or missing entries as absent, so a
//! damaged file can never wedge the stores; writes propagate their errors.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

/// Well-known storage keys.
pub mod keys {
    /// Key for the persisted authenticated identity.
    pub const IDENTITY: &str = "identity";

    /// Key for the persisted cart line items.
    pub const CART: &str = "cart";
}

/// Errors that can occur when writing durable state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to the local state directory.
///
/// Cheaply cloneable; all store handles share one directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: Arc<PathBuf>,
}

impl Storage {
    /// Open (creating if necessary) a state directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir: Arc::new(dir) })
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Missing and malformed entries are both treated as absent; a malformed
    /// entry additionally logs a warning.
    #[must_use]
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let content = fs::read_to_string(&path).ok()?;

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding malformed persisted state");
                None
            }
        }
    }

    /// Serialize and persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the filesystem write fails.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), content)?;
        Ok(())
    }

    /// Remove the entry stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the entry exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}
