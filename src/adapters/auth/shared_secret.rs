//! Shared-secret credential verifier.
//!
//! The admin gate accepts exactly one configured password. The secret is
//! held in a `SecretString` so it never shows up in `Debug` output, and the
//! comparison runs in constant time for equal-length inputs.
//!
//! # Example
//!
//! ```ignore
//! use venture_journal::adapters::auth::SharedSecretVerifier;
//!
//! let verifier = SharedSecretVerifier::new("admin123");
//! assert!(verifier.verify("admin123").await);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use subtle::ConstantTimeEq;

use crate::ports::CredentialVerifier;

/// Verifier that matches a single shared password.
pub struct SharedSecretVerifier {
    secret: SecretString,
}

impl fmt::Debug for SharedSecretVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecretVerifier")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    pub fn from_secret(secret: SecretString) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl CredentialVerifier for SharedSecretVerifier {
    async fn verify(&self, credential: &str) -> bool {
        let expected = self.secret.expose_secret().as_bytes();
        let provided = credential.as_bytes();

        if expected.len() != provided.len() {
            return false;
        }
        expected.ct_eq(provided).into()
    }
}
