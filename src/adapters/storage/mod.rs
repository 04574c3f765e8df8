//! Storage Adapters
//!
//! Implementations of the KeyValueStore port backing the venture store.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - One plain file per key on disk
//! - **InMemoryKeyValueStore** - Slots kept in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-based storage
//! let storage = FileKeyValueStore::new("./data/admin");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
