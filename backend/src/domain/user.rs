//! User account primitives.
//!
//! Each value type validates its raw string on construction so services only
//! ever see well-formed identifiers, passwords and nicknames.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::CredentialHash;

/// Validation failures for registration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// `userID` does not match the identifier pattern.
    #[error(
        "userID must start with a lowercase letter and contain 6 to 20 lowercase letters or digits"
    )]
    InvalidLoginId,
    /// `password` does not match the password policy.
    #[error("password must be 8 to 16 letters or digits and include at least one of each")]
    InvalidPassword,
    /// `nickname` does not match the nickname pattern.
    #[error("nickname must be 2 to 10 Hangul syllables, letters or digits")]
    InvalidNickname,
}

impl UserValidationError {
    /// Name of the request field that failed validation.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidLoginId => "userID",
            Self::InvalidPassword => "password",
            Self::InvalidNickname => "nickname",
        }
    }
}

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("pattern {pattern} failed to compile: {error}"))
    })
}

static LOGIN_ID_RE: OnceLock<Regex> = OnceLock::new();
static PASSWORD_RE: OnceLock<Regex> = OnceLock::new();
static NICKNAME_RE: OnceLock<Regex> = OnceLock::new();

/// Store-assigned surrogate key for a user (`userIdx`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserKey(i32);

impl UserKey {
    /// Wrap a raw key.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw key value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Externally visible login identifier (`userID`).
///
/// ## Invariants
/// - Starts with a lowercase ASCII letter.
/// - 6 to 20 characters drawn from lowercase ASCII letters and digits.
///
/// # Examples
/// ```
/// use matjip::domain::LoginId;
///
/// assert!(LoginId::new("abcdef1").is_ok());
/// assert!(LoginId::new("1abcdef").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoginId(String);

impl LoginId {
    /// Validate and construct a [`LoginId`].
    ///
    /// # Errors
    /// Returns [`UserValidationError::InvalidLoginId`] on a pattern mismatch.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        if compiled(&LOGIN_ID_RE, "^[a-z][a-z0-9]{5,19}$").is_match(&value) {
            Ok(Self(value))
        } else {
            Err(UserValidationError::InvalidLoginId)
        }
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for LoginId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LoginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plaintext password accepted at registration.
///
/// The buffer is wiped on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`].
    ///
    /// # Errors
    /// Returns [`UserValidationError::InvalidPassword`] unless the value is
    /// 8 to 16 ASCII letters or digits containing at least one of each.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = Zeroizing::new(value.into());
        let shape_ok = compiled(&PASSWORD_RE, "^[0-9A-Za-z]{8,16}$").is_match(&value);
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
        if shape_ok && has_digit && has_letter {
            Ok(Self(value))
        } else {
            Err(UserValidationError::InvalidPassword)
        }
    }

    /// Expose the plaintext for hashing.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Display name shown to other users.
///
/// ## Invariants
/// - 2 to 10 characters drawn from Hangul syllables and ASCII letters or
///   digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    /// Validate and construct a [`Nickname`].
    ///
    /// # Errors
    /// Returns [`UserValidationError::InvalidNickname`] on a pattern mismatch.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        if compiled(&NICKNAME_RE, "^[가-힣a-zA-Z0-9]{2,10}$").is_match(&value) {
            Ok(Self(value))
        } else {
            Err(UserValidationError::InvalidNickname)
        }
    }

    /// Borrow the nickname.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soft-delete status flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    /// Stored as `'A'`.
    Active,
    /// Stored as `'D'`.
    Deleted,
}

impl UserStatus {
    /// Single-character storage code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Active => "A",
            Self::Deleted => "D",
        }
    }
}

/// Active user row as read during login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Surrogate key.
    pub key: UserKey,
    /// Stored nickname.
    pub nickname: String,
    /// Stored credential hash.
    pub credential_hash: CredentialHash,
}

/// User row to be inserted on registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserAccount {
    /// Unique login identifier.
    pub login_id: LoginId,
    /// Hash of the chosen password.
    pub credential_hash: CredentialHash,
    /// Chosen nickname.
    pub nickname: Nickname,
}
