//! Sign-up, sign-in and token check handlers.
//!
//! ```text
//! POST /api/v1/sign-up {"userID":"abcdef1","password":"password123","nickname":"nick"}
//! POST /api/v1/sign-in {"userID":"abcdef1","password":"password123"}
//! GET  /api/v1/jwt     (x-access-token: <jwt>)
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::envelope::Envelope;
use super::schemas::{ErrorEnvelopeSchema, IdentityEnvelopeSchema, TokenEnvelopeSchema};
use super::state::HttpState;
use super::token_gate::VerifiedToken;
use super::validation::{login_error, registration_error};
use crate::domain::{LoginCredentials, Registration, SessionIdentity, SessionToken};
use crate::inbound::http::ApiResult;

/// Success message for `POST /sign-up`.
pub const SIGN_UP_MESSAGE: &str = "sign-up succeeded";
/// Success message for `POST /sign-in`.
pub const SIGN_IN_MESSAGE: &str = "sign-in succeeded";
/// Success message for `GET /jwt`.
pub const VALID_TOKEN_MESSAGE: &str = "valid token";

/// Request body for `POST /api/v1/sign-up`.
///
/// Missing fields deserialise as empty strings and fail validation.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignUpRequest {
    /// Login identifier.
    #[serde(rename = "userID", default)]
    pub user_id: String,
    /// Password.
    #[serde(default)]
    pub password: String,
    /// Display name.
    #[serde(default)]
    pub nickname: String,
}

/// Request body for `POST /api/v1/sign-in`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignInRequest {
    /// Login identifier.
    #[serde(rename = "userID", default)]
    pub user_id: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// `result` payload of sign-up and sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct TokenResult {
    /// Signed session token.
    pub jwt: String,
}

impl From<SessionToken> for TokenResult {
    fn from(token: SessionToken) -> Self {
        Self {
            jwt: token.into_inner(),
        }
    }
}

/// `result` payload of `GET /jwt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResult {
    /// Surrogate key of the user.
    pub user_idx: i32,
    /// Display name at the time the token was issued.
    pub nickname: String,
}

impl From<SessionIdentity> for IdentityResult {
    fn from(identity: SessionIdentity) -> Self {
        Self {
            user_idx: identity.user_idx.get(),
            nickname: identity.nickname,
        }
    }
}

impl TryFrom<SignUpRequest> for Registration {
    type Error = crate::domain::UserValidationError;

    fn try_from(value: SignUpRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.user_id, &value.password, &value.nickname)
    }
}

impl TryFrom<SignInRequest> for LoginCredentials {
    type Error = crate::domain::LoginValidationError;

    fn try_from(value: SignInRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.user_id, &value.password)
    }
}

/// Register a user and return a session token.
#[utoipa::path(
    post,
    path = "/api/v1/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Registered", body = TokenEnvelopeSchema),
        (status = 400, description = "A field failed validation", body = ErrorEnvelopeSchema),
        (status = 410, description = "userID already exists", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["auth"],
    operation_id = "signUp",
    security([])
)]
#[post("/sign-up")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<SignUpRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(payload.into_inner()).map_err(registration_error)?;
    let token = state.registration.register(&registration).await?;
    info!(login_id = %registration.login_id(), "user registered");
    Ok(HttpResponse::Ok().json(Envelope::success(SIGN_UP_MESSAGE, TokenResult::from(token))))
}

/// Authenticate a user and return a session token.
#[utoipa::path(
    post,
    path = "/api/v1/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Authenticated", body = TokenEnvelopeSchema),
        (status = 400, description = "Missing fields", body = ErrorEnvelopeSchema),
        (status = 410, description = "No member matches the credentials", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["auth"],
    operation_id = "signIn",
    security([])
)]
#[post("/sign-in")]
pub async fn sign_in(
    state: web::Data<HttpState>,
    payload: web::Json<SignInRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from(payload.into_inner()).map_err(login_error)?;
    let token = state.login.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(Envelope::success(SIGN_IN_MESSAGE, TokenResult::from(token))))
}

/// Echo the identity carried by a valid session token.
#[utoipa::path(
    get,
    path = "/api/v1/jwt",
    params(
        ("x-access-token" = Option<String>, Header, description = "Session token")
    ),
    responses(
        (status = 200, description = "Token is valid", body = IdentityEnvelopeSchema),
        (status = 401, description = "Token missing, invalid or expired", body = ErrorEnvelopeSchema)
    ),
    tags = ["auth"],
    operation_id = "verifyToken"
)]
#[get("/jwt")]
pub async fn verify_token(token: VerifiedToken) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::success(
        VALID_TOKEN_MESSAGE,
        IdentityResult::from(token.into_inner()),
    ))
}
