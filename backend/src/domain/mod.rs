//! Domain types, services and ports.
//!
//! Purpose: hold the transport-agnostic core. Inbound adapters validate raw
//! input into the value types here and call driving ports; outbound adapters
//! implement the driven ports.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: use-case failures.
//! - [`LoginId`], [`Password`], [`Nickname`], [`Registration`],
//!   [`LoginCredentials`]: validated user input.
//! - [`SessionIdentity`], [`SessionToken`]: token payload and wrapper.
//! - [`Category`], [`Restaurant`]: listing model.
//! - [`AuthService`], [`RestaurantListingService`]: use-case services.

pub mod auth;
pub mod auth_service;
pub mod error;
pub mod ports;
pub mod restaurant;
pub mod restaurant_service;
pub mod trace_id;
pub mod user;

pub use self::auth::{
    CredentialHash, LoginCredentials, LoginValidationError, Registration, SessionIdentity,
    SessionToken,
};
pub use self::auth_service::{AuthService, DUPLICATE_LOGIN_ID_MESSAGE, LOGIN_REJECTED_MESSAGE};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::restaurant::{Category, Restaurant, UnknownCategory};
pub use self::restaurant_service::RestaurantListingService;
pub use self::trace_id::TraceId;
pub use self::user::{
    LoginId, NewUserAccount, Nickname, Password, UserAccount, UserKey, UserStatus,
    UserValidationError,
};

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
