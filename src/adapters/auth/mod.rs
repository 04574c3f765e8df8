//! Authentication adapters.
//!
//! Implementations of the `CredentialVerifier` port:
//!
//! - `shared_secret` - Single configured admin password

mod shared_secret;

pub use shared_secret::SharedSecretVerifier;
