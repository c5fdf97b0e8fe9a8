//! HS256 JWT implementation of the `SessionTokenService` port.

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{SessionTokenError, SessionTokenService};
use crate::domain::{SessionIdentity, SessionToken, UserKey};

use super::TokenSecret;

/// Token lifetime used when none is configured.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    user_idx: i32,
    nickname: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies HS256 session tokens with a fixed lifetime.
pub struct JwtSessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl JwtSessionTokens {
    /// Build a token service signing with `secret`.
    ///
    /// `clock` supplies `iat`; expiry is checked against wall-clock time.
    pub fn new(secret: &TokenSecret, ttl: Duration, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);
        Self {
            encoding: EncodingKey::from_secret(secret.expose()),
            decoding: DecodingKey::from_secret(secret.expose()),
            validation,
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
            clock,
        }
    }
}

impl SessionTokenService for JwtSessionTokens {
    fn issue(&self, identity: &SessionIdentity) -> Result<SessionToken, SessionTokenError> {
        let iat = self.clock.utc().timestamp();
        let claims = Claims {
            user_idx: identity.user_idx.get(),
            nickname: identity.nickname.clone(),
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map(SessionToken::new)
            .map_err(|err| SessionTokenError::signing(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionIdentity, SessionTokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => SessionTokenError::expired(),
                _ => SessionTokenError::invalid(err.to_string()),
            }
        })?;
        Ok(SessionIdentity::new(
            UserKey::new(data.claims.user_idx),
            data.claims.nickname,
        ))
    }
}
