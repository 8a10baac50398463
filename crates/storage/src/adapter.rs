//! Storage adapter abstraction
//!
//! Every backend stores opaque string blobs under string keys. State owners
//! talk to storage only through [`StorageAdapter`], so tests can swap in an
//! in-memory or mocked backend.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value is not valid UTF-8
    #[error("Invalid UTF-8 in value for key: {0}")]
    InvalidUtf8(String),

    /// Corruption detected
    #[error("Corruption detected: {0}")]
    Corruption(String),

    /// Version mismatch
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected version
        expected: u32,
        /// Found version
        found: u32,
    },

    /// Key rejected by the backend
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed blob store
pub trait StorageAdapter: Send + Sync {
    /// Load the blob stored under `key`
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the blob under `key`, returning whether one existed
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Typed JSON helpers for any [`StorageAdapter`]
pub trait JsonStorageExt: StorageAdapter {
    /// Load and deserialize a value
    fn load_json<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.load(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a value
    fn save_json<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.save(key, &raw)
    }
}

impl<S: StorageAdapter + ?Sized> JsonStorageExt for S {}
