//! Registration, sign-in and token verification use-cases.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use super::ports::{
    CredentialHashError, CredentialHasher, LoginService, RegistrationService, SessionTokenError,
    SessionTokenService, SessionVerifier, UserPersistenceError, UserRepository,
};
use super::{
    Error, LoginCredentials, NewUserAccount, Registration, SessionIdentity, SessionToken,
};

/// Message returned when a sign-up reuses an identifier.
pub const DUPLICATE_LOGIN_ID_MESSAGE: &str = "userID already exists";
/// Message returned for any failed sign-in; it does not reveal which part was wrong.
pub const LOGIN_REJECTED_MESSAGE: &str = "no member matches the given userID and password";

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateLoginId { .. } => duplicate_login_id(),
    }
}

fn duplicate_login_id() -> Error {
    Error::rejected(DUPLICATE_LOGIN_ID_MESSAGE).with_details(json!({ "field": "userID" }))
}

fn map_hash_error(error: &CredentialHashError) -> Error {
    Error::internal(format!("credential hashing failed: {error}"))
}

fn map_issue_error(error: &SessionTokenError) -> Error {
    Error::internal(format!("session token issuance failed: {error}"))
}

/// Authentication service over a user store, a credential hasher and a
/// token codec.
#[derive(Clone)]
pub struct AuthService<U, H, T> {
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U, H, T> AuthService<U, H, T> {
    /// Create a new service from its collaborators.
    pub fn new(users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

impl<U, H, T> AuthService<U, H, T>
where
    T: SessionTokenService,
{
    fn mint(&self, identity: &SessionIdentity) -> Result<SessionToken, Error> {
        self.tokens.issue(identity).map_err(|err| map_issue_error(&err))
    }
}

#[async_trait]
impl<U, H, T> RegistrationService for AuthService<U, H, T>
where
    U: UserRepository,
    H: CredentialHasher,
    T: SessionTokenService,
{
    async fn register(&self, registration: &Registration) -> Result<SessionToken, Error> {
        let login_id = registration.login_id();
        if self
            .users
            .login_id_exists(login_id)
            .await
            .map_err(map_user_persistence_error)?
        {
            debug!(login_id = %login_id, "sign-up rejected: identifier taken");
            return Err(duplicate_login_id());
        }

        let credential_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(|err| map_hash_error(&err))?;
        let account = NewUserAccount {
            login_id: login_id.clone(),
            credential_hash,
            nickname: registration.nickname().clone(),
        };
        let key = self
            .users
            .insert(&account)
            .await
            .map_err(map_user_persistence_error)?;

        debug!(user_idx = %key, "user registered");
        self.mint(&SessionIdentity::new(key, registration.nickname().as_str()))
    }
}

impl<U, H, T> AuthService<U, H, T>
where
    H: CredentialHasher,
{
    /// Spend one verification on the decoy hash so a missing account costs
    /// as much as a wrong password.
    async fn burn_decoy(&self, password: &str) {
        let decoy = self.hasher.decoy_hash();
        match self.hasher.verify(password, &decoy).await {
            Ok(false) => {}
            Ok(true) => warn!("decoy credential hash matched a presented password"),
            Err(err) => warn!(error = %err, "decoy credential check failed"),
        }
    }
}

#[async_trait]
impl<U, H, T> LoginService for AuthService<U, H, T>
where
    U: UserRepository,
    H: CredentialHasher,
    T: SessionTokenService,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionToken, Error> {
        let Some(account) = self
            .users
            .find_active_by_login_id(credentials.user_id())
            .await
            .map_err(map_user_persistence_error)?
        else {
            self.burn_decoy(credentials.password()).await;
            return Err(Error::rejected(LOGIN_REJECTED_MESSAGE));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &account.credential_hash)
            .await
            .map_err(|err| {
                warn!(user_idx = %account.key, error = %err, "stored credential hash unusable");
                map_hash_error(&err)
            })?;
        if !matches {
            return Err(Error::rejected(LOGIN_REJECTED_MESSAGE));
        }

        self.mint(&SessionIdentity::new(account.key, account.nickname))
    }
}

impl<U, H, T> SessionVerifier for AuthService<U, H, T>
where
    U: Send + Sync,
    H: Send + Sync,
    T: SessionTokenService,
{
    fn verify(&self, token: &str) -> Result<SessionIdentity, Error> {
        self.tokens.verify(token).map_err(|err| match err {
            SessionTokenError::Expired => Error::unauthorized("access token has expired"),
            SessionTokenError::Invalid { message } => {
                debug!(reason = %message, "access token rejected");
                Error::unauthorized("access token is invalid")
            }
            SessionTokenError::Signing { message } => {
                Error::internal(format!("session token verification failed: {message}"))
            }
        })
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
