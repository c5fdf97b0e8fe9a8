//! Restaurant listing and token authentication backend.
//!
//! The crate follows a hexagonal layout:
//! - [`domain`] holds value types, services and ports.
//! - [`inbound::http`] exposes the actix-web handlers and response envelope.
//! - [`outbound`] implements the driven ports (PostgreSQL, JWT, Argon2).

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
