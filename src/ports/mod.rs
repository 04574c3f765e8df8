//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Durable string-keyed slots the venture store mirrors into
//! - `CredentialVerifier` - Admin login check

mod credential_verifier;
mod key_value_store;

pub use credential_verifier::CredentialVerifier;
pub use key_value_store::{validate_key, KeyValueStore, KeyValueStoreError};
