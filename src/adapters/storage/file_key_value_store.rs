//! File-based Key-Value Store Adapter
//!
//! Stores each key as one plain file under a base directory. Values are
//! written to a sibling temp file first and renamed into place, so a crash
//! mid-write leaves the previous value intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{validate_key, KeyValueStore, KeyValueStoreError};

/// File-based storage for durable key-value slots
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at a base directory
    ///
    /// The directory is created lazily on first write.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileKeyValueStore::new("./data/admin");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a key
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!(".{}.tmp", key))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self) -> Result<(), KeyValueStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        validate_key(key)?;

        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueStoreError::IoError(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        self.ensure_dir().await?;

        let temp = self.temp_path(key);
        fs::write(&temp, value)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;

        fs::rename(&temp, self.key_path(key))
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;

        tracing::trace!(key, bytes = value.len(), "wrote key-value slot");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;

        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueStoreError::IoError(e.to_string())),
        }
    }
}
