//! Driving ports for sign-in and token verification.
//!
//! Inbound adapters call these without knowing which store or token scheme
//! backs them, so handler tests can swap in doubles.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SessionIdentity, SessionToken};

/// Exchange credentials for a session token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Authenticate an active account and mint a token for it.
    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionToken, Error>;
}

/// Check a presented token.
#[cfg_attr(test, mockall::automock)]
pub trait SessionVerifier: Send + Sync {
    /// Return the identity embedded in a valid, unexpired token.
    fn verify(&self, token: &str) -> Result<SessionIdentity, Error>;
}
