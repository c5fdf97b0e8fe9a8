//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginService, RegistrationService, RestaurantsQuery, SessionVerifier};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Sign-up use-case.
    pub registration: Arc<dyn RegistrationService>,
    /// Sign-in use-case.
    pub login: Arc<dyn LoginService>,
    /// Token verification used by the access gate.
    pub sessions: Arc<dyn SessionVerifier>,
    /// Restaurant listing use-case.
    pub restaurants: Arc<dyn RestaurantsQuery>,
}

impl HttpState {
    /// Bundle the port implementations.
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        login: Arc<dyn LoginService>,
        sessions: Arc<dyn SessionVerifier>,
        restaurants: Arc<dyn RestaurantsQuery>,
    ) -> Self {
        Self {
            registration,
            login,
            sessions,
            restaurants,
        }
    }
}
