//! Signed session tokens (HS256 JWT) and the signing secret they rely on.

pub mod fingerprint;
mod jwt;
pub mod secret_config;

pub use jwt::{DEFAULT_TOKEN_TTL, JwtSessionTokens};
pub use secret_config::{BuildMode, TokenConfigError, TokenSecret, token_secret_from_env};
