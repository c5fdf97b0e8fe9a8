//! Authentication primitives: credentials, registrations and session tokens.
//!
//! Inbound adapters hand raw strings to the constructors here; services only
//! receive values that already passed validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::{LoginId, Nickname, Password, UserKey, UserValidationError};

/// Validation failure for a sign-in payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// `userID` or `password` was absent or empty.
    #[error("userID and password are required")]
    MissingFields,
}

/// Credentials presented at sign-in.
///
/// Only presence is checked; a malformed identifier simply fails to match a
/// stored account.
///
/// # Examples
/// ```
/// use matjip::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("abcdef1", "password123").unwrap();
/// assert_eq!(creds.user_id(), "abcdef1");
/// assert!(LoginCredentials::try_from_parts("", "password123").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    user_id: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    ///
    /// # Errors
    /// Returns [`LoginValidationError::MissingFields`] when either value is
    /// empty.
    pub fn try_from_parts(user_id: &str, password: &str) -> Result<Self, LoginValidationError> {
        if user_id.is_empty() || password.is_empty() {
            return Err(LoginValidationError::MissingFields);
        }
        Ok(Self {
            user_id: user_id.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Identifier used for the account lookup.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    /// Password presented by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .finish()
    }
}

/// Validated sign-up request.
///
/// Fields are checked in order `userID`, `password`, `nickname`; the first
/// failure is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    login_id: LoginId,
    password: Password,
    nickname: Nickname,
}

impl Registration {
    /// Validate raw sign-up inputs.
    ///
    /// # Errors
    /// Returns the [`UserValidationError`] of the first field that fails.
    ///
    /// # Examples
    /// ```
    /// use matjip::domain::{Registration, UserValidationError};
    ///
    /// let err = Registration::try_from_parts("x", "bad", "n").unwrap_err();
    /// assert_eq!(err, UserValidationError::InvalidLoginId);
    /// ```
    pub fn try_from_parts(
        user_id: &str,
        password: &str,
        nickname: &str,
    ) -> Result<Self, UserValidationError> {
        let login_id = LoginId::new(user_id)?;
        let password = Password::new(password)?;
        let nickname = Nickname::new(nickname)?;
        Ok(Self {
            login_id,
            password,
            nickname,
        })
    }

    /// Requested login identifier.
    #[must_use]
    pub fn login_id(&self) -> &LoginId {
        &self.login_id
    }

    /// Chosen password.
    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Chosen nickname.
    #[must_use]
    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }
}

/// PHC-formatted credential hash as stored alongside the user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wrap an encoded hash.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Borrow the encoded hash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Claims carried by a session token and echoed by the verify endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    /// Surrogate key of the authenticated user.
    pub user_idx: UserKey,
    /// Nickname at the time the token was issued.
    pub nickname: String,
}

impl SessionIdentity {
    /// Build an identity from its parts.
    pub fn new(user_idx: UserKey, nickname: impl Into<String>) -> Self {
        Self {
            user_idx,
            nickname: nickname.into(),
        }
    }
}

/// Signed, self-contained session token.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an encoded token.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Borrow the encoded token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the wrapper.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "password123")]
    #[case("abcdef1", "")]
    #[case("", "")]
    fn missing_credentials_are_rejected(#[case] user_id: &str, #[case] password: &str) {
        let err = LoginCredentials::try_from_parts(user_id, password)
            .expect_err("missing fields must fail");
        assert_eq!(err, LoginValidationError::MissingFields);
    }

    #[rstest]
    fn credentials_keep_raw_values() {
        let creds = LoginCredentials::try_from_parts("Not-A-Valid-Id", "x")
            .expect("presence is the only check");
        assert_eq!(creds.user_id(), "Not-A-Valid-Id");
        assert_eq!(creds.password(), "x");
    }

    #[rstest]
    fn credentials_debug_hides_password() {
        let creds = LoginCredentials::try_from_parts("abcdef1", "password123")
            .expect("valid credentials");
        assert!(!format!("{creds:?}").contains("password123"));
    }

    #[rstest]
    #[case("bad", "bad", "!", UserValidationError::InvalidLoginId)]
    #[case("abcdef1", "bad", "!", UserValidationError::InvalidPassword)]
    #[case("abcdef1", "password123", "!", UserValidationError::InvalidNickname)]
    fn registration_reports_first_failure(
        #[case] user_id: &str,
        #[case] password: &str,
        #[case] nickname: &str,
        #[case] expected: UserValidationError,
    ) {
        let err = Registration::try_from_parts(user_id, password, nickname)
            .expect_err("invalid registration must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn registration_accepts_valid_input() {
        let registration = Registration::try_from_parts("abcdef1", "password123", "nick")
            .expect("valid registration");
        assert_eq!(registration.login_id().as_str(), "abcdef1");
        assert_eq!(registration.password().expose(), "password123");
        assert_eq!(registration.nickname().as_str(), "nick");
    }

    #[rstest]
    fn identity_serialises_with_user_idx() {
        let identity = SessionIdentity::new(UserKey::new(7), "nick");
        let value = serde_json::to_value(&identity).expect("serialise identity");
        assert_eq!(value, serde_json::json!({ "userIdx": 7, "nickname": "nick" }));
    }
}
