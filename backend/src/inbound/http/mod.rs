//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every route answers with the [`envelope::Envelope`] JSON shape; failures
//! are rendered by the [`actix_web::ResponseError`] impl in [`error`].

pub mod auth;
pub mod envelope;
pub mod error;
pub mod health;
pub mod restaurants;
pub mod schemas;
pub mod state;
pub mod token_gate;
pub mod validation;

pub use error::ApiResult;
