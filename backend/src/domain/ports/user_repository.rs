//! Driven port for user account storage.

use async_trait::async_trait;

use crate::domain::{LoginId, NewUserAccount, UserAccount, UserKey};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The unique constraint on the login identifier rejected an insert.
        DuplicateLoginId { login_id: String } => "login id already taken: {login_id}",
    }
}

/// Port for reading and creating user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether any row, active or deleted, uses `login_id`.
    async fn login_id_exists(&self, login_id: &LoginId) -> Result<bool, UserPersistenceError>;

    /// Insert an active account and return its surrogate key.
    ///
    /// A unique violation surfaces as [`UserPersistenceError::DuplicateLoginId`].
    async fn insert(&self, account: &NewUserAccount) -> Result<UserKey, UserPersistenceError>;

    /// Fetch the active account for `login_id`, if any.
    async fn find_active_by_login_id(
        &self,
        login_id: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError>;
}
