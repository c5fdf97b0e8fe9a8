//! Driven port for one-way credential hashing.

use async_trait::async_trait;

use crate::domain::{CredentialHash, Password};

use super::define_port_error;

define_port_error! {
    /// Failures raised while hashing or verifying credentials.
    pub enum CredentialHashError {
        /// Hashing the plaintext failed.
        Hash { message: String } => "credential hashing failed: {message}",
        /// The stored hash could not be parsed.
        MalformedHash { message: String } => "stored credential hash is malformed: {message}",
        /// The worker running the hash was cancelled or panicked.
        Worker { message: String } => "credential worker failed: {message}",
    }
}

/// Salted password hashing with constant-time verification.
///
/// Adapters run the work off the async executor so slow hashes do not stall
/// other requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash a validated password for storage.
    async fn hash(&self, password: &Password) -> Result<CredentialHash, CredentialHashError>;

    /// Check `password` against a stored hash.
    async fn verify(
        &self,
        password: &str,
        hash: &CredentialHash,
    ) -> Result<bool, CredentialHashError>;

    /// A hash no password is known to match, with the same cost as real
    /// hashes.
    ///
    /// Sign-in verifies against it when no account matches, so unknown
    /// identifiers take as long as wrong passwords.
    fn decoy_hash(&self) -> CredentialHash;
}
