//! Key-Value Store Port - Interface for the durable string-keyed slots the
//! venture store mirrors itself into.
//!
//! The store writes whole values: every mutation overwrites the full
//! serialized collection under one key, so adapters never need partial
//! updates or transactions.

use async_trait::async_trait;

/// Errors that can occur during key-value storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for reading and writing durable string values
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `Ok(None)` if nothing is stored under the key
    ///
    /// # Errors
    /// Returns `KeyValueStoreError` if the slot exists but cannot be read
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `KeyValueStoreError` if the write fails
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove the value under `key`; removing an absent key succeeds
    ///
    /// # Errors
    /// Returns `KeyValueStoreError` if deletion fails
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

/// Checks that a key is safe to use as a slot name on every backend.
///
/// Keys must be non-empty and limited to ASCII letters, digits, `_` and `-`.
pub fn validate_key(key: &str) -> Result<(), KeyValueStoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(KeyValueStoreError::InvalidKey(key.to_string()))
    }
}
