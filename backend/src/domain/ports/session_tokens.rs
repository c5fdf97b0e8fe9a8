//! Driven port for minting and checking signed session tokens.

use crate::domain::{SessionIdentity, SessionToken};

use super::define_port_error;

define_port_error! {
    /// Failures raised by token adapters.
    pub enum SessionTokenError {
        /// The token is malformed or its signature does not verify.
        Invalid { message: String } => "session token rejected: {message}",
        /// The token's expiry has passed.
        Expired => "session token expired",
        /// Encoding a new token failed.
        Signing { message: String } => "session token signing failed: {message}",
    }
}

/// Stateless token issuance and verification.
#[cfg_attr(test, mockall::automock)]
pub trait SessionTokenService: Send + Sync {
    /// Sign a token carrying `identity`.
    fn issue(&self, identity: &SessionIdentity) -> Result<SessionToken, SessionTokenError>;

    /// Verify signature and expiry, returning the embedded identity.
    fn verify(&self, token: &str) -> Result<SessionIdentity, SessionTokenError>;
}
