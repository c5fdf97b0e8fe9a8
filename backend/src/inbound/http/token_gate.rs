//! Access gate for routes that require a session token.
//!
//! [`VerifiedToken`] is an extractor: when the token is missing or fails
//! verification the request is answered with a `401` envelope and the
//! handler never runs.

use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use tracing::{debug, error};

use super::state::HttpState;
use crate::domain::{Error, SessionIdentity};

/// Header carrying the raw session token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

const BEARER_PREFIX: &str = "Bearer ";
const MISSING_TOKEN_MESSAGE: &str = "access token is required";

/// Identity decoded from a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken(pub SessionIdentity);

impl VerifiedToken {
    /// Consume the extractor, yielding the identity.
    #[must_use]
    pub fn into_inner(self) -> SessionIdentity {
        self.0
    }
}

/// Read the token from `x-access-token`, falling back to a bearer
/// `Authorization` header. Blank values count as absent.
pub(crate) fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let direct = headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    direct.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    })
}

fn verify_request(req: &HttpRequest) -> Result<VerifiedToken, Error> {
    let Some(state) = req.app_data::<web::Data<HttpState>>() else {
        error!("HttpState missing from app data");
        return Err(Error::internal("HTTP state is not configured"));
    };
    let Some(token) = token_from_headers(req.headers()) else {
        debug!("request without access token");
        return Err(Error::unauthorized(MISSING_TOKEN_MESSAGE));
    };
    state.sessions.verify(token).map(VerifiedToken)
}

impl FromRequest for VerifiedToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(verify_request(req))
    }
}
