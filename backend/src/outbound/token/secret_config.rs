//! Token signing secret loading and validation.
//!
//! Settings come from the environment through [`mockable::Env`] so the rules
//! below can be exercised without touching the process environment:
//!
//! - `TOKEN_SECRET_FILE` names the secret file (default
//!   `/var/run/secrets/token_secret`). Trailing newlines are ignored.
//! - `TOKEN_ALLOW_EPHEMERAL=1` lets debug builds fall back to a random
//!   per-process secret when the file cannot be read. Release builds refuse it.
//! - Release builds require at least [`TOKEN_SECRET_MIN_LEN`] bytes.

use std::path::PathBuf;

use mockable::Env;
use rand::RngCore;
use tracing::warn;
use zeroize::{Zeroize, Zeroizing};

use super::fingerprint::secret_fingerprint;

const TOKEN_SECRET_DEFAULT_PATH: &str = "/var/run/secrets/token_secret";
/// Minimum secret length accepted by release builds.
pub const TOKEN_SECRET_MIN_LEN: usize = 32;
const EPHEMERAL_SECRET_LEN: usize = 64;
const SECRET_FILE_ENV: &str = "TOKEN_SECRET_FILE";
const ALLOW_EPHEMERAL_ENV: &str = "TOKEN_ALLOW_EPHEMERAL";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";

/// Build mode for secret validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds may use an ephemeral secret and skip the length check.
    Debug,
    /// Release builds require a sufficiently long secret on disk.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matjip::outbound::token::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Errors raised while loading the signing secret.
#[derive(thiserror::Error, Debug)]
pub enum TokenConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the secret file failed.
    #[error("failed to read token secret at {path}: {source}")]
    SecretRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The secret file is empty.
    #[error("token secret at {path} is empty")]
    SecretEmpty { path: PathBuf },
    /// The secret is too short for release builds.
    #[error("token secret at {path} too short: need >= {min_len} bytes, got {length}")]
    SecretTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// Release builds must not allow ephemeral secrets.
    #[error("TOKEN_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// HMAC signing secret. The bytes are wiped on drop.
pub struct TokenSecret {
    bytes: Zeroizing<Vec<u8>>,
    ephemeral: bool,
}

impl TokenSecret {
    /// Wrap raw secret bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
            ephemeral: false,
        }
    }

    /// Generate a random per-process secret.
    #[must_use]
    pub fn ephemeral() -> Self {
        let mut bytes = vec![0_u8; EPHEMERAL_SECRET_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self {
            bytes: Zeroizing::new(bytes),
            ephemeral: true,
        }
    }

    /// Raw secret bytes for key construction.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Whether the secret was generated for this process only.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    /// Loggable fingerprint of the secret.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        secret_fingerprint(self.expose())
    }
}

impl std::fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSecret")
            .field("fingerprint", &self.fingerprint())
            .field("ephemeral", &self.ephemeral)
            .finish()
    }
}

/// Load the token signing secret from environment-driven settings.
///
/// # Errors
/// Returns [`TokenConfigError`] when a toggle is invalid or the secret file
/// cannot be used under `mode`.
///
/// # Examples
///
/// ```rust
/// use matjip::outbound::token::{token_secret_from_env, BuildMode};
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = std::env::temp_dir().join("token_secret_example");
/// std::fs::write(&path, vec![b'a'; 32])?;
///
/// let path_str = path.to_string_lossy().into_owned();
/// let mut env = MockEnv::new();
/// env.expect_string().returning(move |name| match name {
///     "TOKEN_SECRET_FILE" => Some(path_str.clone()),
///     _ => None,
/// });
///
/// let secret = token_secret_from_env(&env, BuildMode::Release)?;
/// assert_eq!(secret.expose().len(), 32);
///
/// std::fs::remove_file(&path)?;
/// # Ok(())
/// # }
/// ```
pub fn token_secret_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<TokenSecret, TokenConfigError> {
    let allow_ephemeral = allow_ephemeral_from_env(env, mode)?;
    let path = PathBuf::from(
        env.string(SECRET_FILE_ENV)
            .unwrap_or_else(|| TOKEN_SECRET_DEFAULT_PATH.to_owned()),
    );

    match std::fs::read(&path) {
        Ok(bytes) => secret_from_file_bytes(bytes, path, mode),
        Err(error) if allow_ephemeral => {
            warn!(
                path = %path.display(),
                error = %error,
                "using ephemeral token secret (dev only); tokens will not survive a restart"
            );
            Ok(TokenSecret::ephemeral())
        }
        Err(source) => Err(TokenConfigError::SecretRead { path, source }),
    }
}

fn secret_from_file_bytes(
    mut bytes: Vec<u8>,
    path: PathBuf,
    mode: BuildMode,
) -> Result<TokenSecret, TokenConfigError> {
    while matches!(bytes.last(), Some(b'\n' | b'\r')) {
        bytes.pop();
    }
    let length = bytes.len();
    if length == 0 {
        return Err(TokenConfigError::SecretEmpty { path });
    }
    if mode == BuildMode::Release && length < TOKEN_SECRET_MIN_LEN {
        bytes.zeroize();
        return Err(TokenConfigError::SecretTooShort {
            path,
            length,
            min_len: TOKEN_SECRET_MIN_LEN,
        });
    }
    if length < TOKEN_SECRET_MIN_LEN {
        warn!(length, "token secret shorter than the release minimum");
    }
    Ok(TokenSecret::from_bytes(bytes))
}

fn allow_ephemeral_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<bool, TokenConfigError> {
    let Some(value) = env.string(ALLOW_EPHEMERAL_ENV) else {
        return Ok(false);
    };
    match parse_bool(&value) {
        Some(true) if mode.is_debug() => Ok(true),
        Some(true) => Err(TokenConfigError::EphemeralNotAllowed),
        Some(false) => Ok(false),
        None if mode.is_debug() => {
            warn!(value = %value, "invalid TOKEN_ALLOW_EPHEMERAL; defaulting to disabled");
            Ok(false)
        }
        None => Err(TokenConfigError::InvalidEnv {
            name: ALLOW_EPHEMERAL_ENV,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
