//! In-Memory Key-Value Store Adapter
//!
//! Keeps slots in a map behind an async lock.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_key, KeyValueStore, KeyValueStoreError};

/// In-memory storage for key-value slots
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with slots
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            slots: Arc::new(RwLock::new(map)),
            fail_writes: Arc::new(RwLock::new(false)),
        }
    }

    /// Makes every subsequent `set`/`remove` fail (for error-path tests)
    pub async fn fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.slots.write().await.clear();
    }

    /// Get the number of stored slots
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }

    async fn check_writable(&self) -> Result<(), KeyValueStoreError> {
        if *self.fail_writes.read().await {
            return Err(KeyValueStoreError::IoError("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        validate_key(key)?;
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        self.check_writable().await?;
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        self.check_writable().await?;
        self.slots.write().await.remove(key);
        Ok(())
    }
}
