//! File-backed persistence with versioning and corruption detection
//!
//! [`FileStore`] keeps one JSON file per key inside a directory. Each file
//! wraps the blob in a `{version, checksum, data}` envelope so truncated or
//! hand-edited files are detected on load, and writes go through a temp file
//! plus rename.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::adapter::{Result, StorageAdapter, StorageError};

/// Versioned blob container
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VersionedBlob {
    /// Version number
    version: u32,
    /// md5 of `data`
    checksum: String,
    /// The stored blob
    data: String,
}

impl VersionedBlob {
    fn new(version: u32, data: &str) -> Self {
        Self { version, checksum: checksum(data), data: data.to_string() }
    }

    fn verify_checksum(&self) -> Result<()> {
        let computed = checksum(&self.data);

        if computed != self.checksum {
            return Err(StorageError::Corruption(format!(
                "Checksum mismatch: expected {}, got {}",
                self.checksum, computed
            )));
        }

        Ok(())
    }
}

fn checksum(data: &str) -> String {
    format!("{:x}", md5::compute(data))
}

/// File store configuration
#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    /// Directory holding one file per key
    pub dir: PathBuf,
    /// Current schema version
    pub version: u32,
    /// Enable atomic writes with temp files
    pub atomic_writes: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("token-studio"), version: 1, atomic_writes: true }
    }
}

impl FileStoreConfig {
    /// Create a new configuration rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), ..Default::default() }
    }

    /// Set schema version
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Enable or disable atomic writes
    pub fn atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }
}

/// Directory of versioned, checksummed JSON files
#[derive(Debug, Clone)]
pub struct FileStore {
    config: FileStoreConfig,
}

impl FileStore {
    /// Create the store, creating its directory if needed
    pub fn new(config: FileStoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.dir)?;
        debug!(dir = %config.dir.display(), version = config.version, "Opened file store");
        Ok(Self { config })
    }

    /// The store configuration
    pub fn config(&self) -> &FileStoreConfig {
        &self.config
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.config.dir.join(format!("{}.json", key)))
    }

    /// Write atomically using temp file + rename
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let temp_path = path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

impl StorageAdapter for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let blob: VersionedBlob = serde_json::from_str(&contents)?;

        if let Err(e) = blob.verify_checksum() {
            warn!(key, "Stored blob failed checksum verification");
            return Err(e);
        }

        if blob.version != self.config.version {
            return Err(StorageError::VersionMismatch {
                expected: self.config.version,
                found: blob.version,
            });
        }

        Ok(Some(blob.data))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let blob = VersionedBlob::new(self.config.version, value);
        let json = serde_json::to_string_pretty(&blob)?;

        if self.config.atomic_writes {
            self.write_atomic(&path, &json)
        } else {
            fs::write(&path, json)?;
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
