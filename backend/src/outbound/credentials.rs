//! Argon2id implementation of the `CredentialHasher` port.
//!
//! Hashes are PHC strings carrying their own salt and parameters, so stored
//! hashes keep verifying after the default cost parameters change. Hashing
//! and verification run on tokio's blocking pool.

use argon2::Argon2;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;
use tokio::task::spawn_blocking;
use zeroize::Zeroizing;

use crate::domain::ports::{CredentialHashError, CredentialHasher};
use crate::domain::{CredentialHash, Password};

const DECOY_SECRET_LEN: usize = 32;

/// Argon2id hasher using the crate's default cost parameters.
#[derive(Debug, Clone)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
    decoy: CredentialHash,
}

impl Argon2CredentialHasher {
    /// Create a hasher with default Argon2id parameters.
    ///
    /// The decoy hash is derived from random bytes that are discarded, so no
    /// password matches it.
    ///
    /// # Errors
    /// Returns [`CredentialHashError::Hash`] when the decoy cannot be hashed.
    pub fn new() -> Result<Self, CredentialHashError> {
        let argon2 = Argon2::default();
        let mut secret = Zeroizing::new([0_u8; DECOY_SECRET_LEN]);
        OsRng.fill_bytes(&mut secret[..]);
        let decoy = hash_bytes(&argon2, &secret[..])?;
        Ok(Self { argon2, decoy })
    }
}

fn hash_bytes(argon2: &Argon2<'_>, plaintext: &[u8]) -> Result<CredentialHash, CredentialHashError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(plaintext, &salt)
        .map(|hash| CredentialHash::new(hash.to_string()))
        .map_err(|err| CredentialHashError::hash(err.to_string()))
}

fn verify_bytes(
    argon2: &Argon2<'_>,
    plaintext: &[u8],
    hash: &CredentialHash,
) -> Result<bool, CredentialHashError> {
    let parsed = PasswordHash::new(hash.as_str())
        .map_err(|err| CredentialHashError::malformed_hash(err.to_string()))?;
    match argon2.verify_password(plaintext, &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(CredentialHashError::malformed_hash(err.to_string())),
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &Password) -> Result<CredentialHash, CredentialHashError> {
        let argon2 = self.argon2.clone();
        let plaintext = Zeroizing::new(password.expose().as_bytes().to_vec());
        spawn_blocking(move || hash_bytes(&argon2, plaintext.as_slice()))
            .await
            .map_err(|err| CredentialHashError::worker(err.to_string()))?
    }

    async fn verify(
        &self,
        password: &str,
        hash: &CredentialHash,
    ) -> Result<bool, CredentialHashError> {
        let argon2 = self.argon2.clone();
        let plaintext = Zeroizing::new(password.as_bytes().to_vec());
        let hash = hash.clone();
        spawn_blocking(move || verify_bytes(&argon2, plaintext.as_slice(), &hash))
            .await
            .map_err(|err| CredentialHashError::worker(err.to_string()))?
    }

    fn decoy_hash(&self) -> CredentialHash {
        self.decoy.clone()
    }
}
