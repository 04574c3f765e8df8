//! Credential verifier port for the admin login gate.
//!
//! The gate is a single shared credential. Implementations decide how the
//! comparison is made; the store only learns whether it matched.
//!
//! # Example
//!
//! ```ignore
//! async fn sign_in(verifier: Arc<dyn CredentialVerifier>, typed: &str) -> bool {
//!     verifier.verify(typed).await
//! }
//! ```

use async_trait::async_trait;

/// Checks a plaintext credential supplied at login.
///
/// # Contract
///
/// Implementations must:
/// - Return `true` only for an exact match
/// - Return `false` for every other input, including empty or malformed input
/// - Never panic
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> bool;
}
