//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`LoginService`, `RegistrationService`, `SessionVerifier`,
//! `RestaurantsQuery`) are called by inbound adapters. Driven ports
//! (`UserRepository`, `RestaurantRepository`, `CredentialHasher`,
//! `SessionTokenService`) are implemented by outbound adapters and expose
//! typed errors that services map onto [`crate::domain::Error`].

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod login_service;
mod registration_service;
mod restaurant_repository;
mod restaurants_query;
mod session_tokens;
mod user_repository;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHashError, CredentialHasher};
#[cfg(test)]
pub use login_service::{MockLoginService, MockSessionVerifier};
pub use login_service::{LoginService, SessionVerifier};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
pub use restaurant_repository::{RestaurantRepository, RestaurantRepositoryError};
#[cfg(test)]
pub use restaurants_query::MockRestaurantsQuery;
pub use restaurants_query::RestaurantsQuery;
#[cfg(test)]
pub use session_tokens::MockSessionTokenService;
pub use session_tokens::{SessionTokenError, SessionTokenService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
