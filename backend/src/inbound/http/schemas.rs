//! OpenAPI schema definitions for the response envelope.
//!
//! [`super::envelope::Envelope`] is generic, so each concrete shape returned
//! by a route gets a documentation-only wrapper here. The wrappers mirror the
//! serialised JSON and are not constructed by handlers.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::auth::{IdentityResult, TokenResult};
use super::restaurants::RestaurantResponse;

/// Envelope returned by sign-up and sign-in.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = TokenEnvelope)]
pub struct TokenEnvelopeSchema {
    /// Whether the request succeeded.
    #[schema(example = true)]
    pub is_success: bool,
    /// Outcome code, equal to the HTTP status.
    #[schema(example = 200)]
    pub code: u16,
    /// Outcome message.
    #[schema(example = "sign-in succeeded")]
    pub message: String,
    /// Outcome payload.
    pub result: TokenResult,
}

/// Envelope returned by `GET /jwt`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = IdentityEnvelope)]
pub struct IdentityEnvelopeSchema {
    /// Whether the request succeeded.
    #[schema(example = true)]
    pub is_success: bool,
    /// Outcome code, equal to the HTTP status.
    #[schema(example = 200)]
    pub code: u16,
    /// Outcome message.
    #[schema(example = "valid token")]
    pub message: String,
    /// Outcome payload.
    pub result: IdentityResult,
}

/// Envelope returned by `GET /restaurants`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RestaurantListEnvelope)]
pub struct RestaurantListEnvelopeSchema {
    /// Whether the request succeeded.
    #[schema(example = true)]
    pub is_success: bool,
    /// Outcome code, equal to the HTTP status.
    #[schema(example = 200)]
    pub code: u16,
    /// Outcome message.
    #[schema(example = "restaurant list retrieved")]
    pub message: String,
    /// Outcome payload.
    pub result: Vec<RestaurantResponse>,
}

/// Failure envelope; `result` carries optional structured details.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ErrorEnvelope)]
pub struct ErrorEnvelopeSchema {
    /// Whether the request succeeded.
    #[schema(example = false)]
    pub is_success: bool,
    /// Outcome code, equal to the HTTP status.
    #[schema(example = 410)]
    pub code: u16,
    /// Outcome message.
    #[schema(example = "userID already exists")]
    pub message: String,
    /// Outcome payload.
    #[schema(value_type = Option<Object>)]
    pub result: Option<Value>,
}
