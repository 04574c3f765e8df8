//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Durable key-value slots (file, in-memory)
//! - `auth` - Admin credential verification

pub mod auth;
pub mod storage;

pub use auth::SharedSecretVerifier;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
