//! Driving port for the sign-up use-case.

use async_trait::async_trait;

use crate::domain::{Error, Registration, SessionToken};

/// Create an account and return a session token for it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a validated sign-up request.
    ///
    /// An identifier already in use, active or deleted, is rejected.
    async fn register(&self, registration: &Registration) -> Result<SessionToken, Error>;
}
