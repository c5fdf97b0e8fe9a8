//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{CredentialHash, LoginId, NewUserAccount, UserAccount, UserKey, UserStatus};

use super::error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{NewUserRow, UserCredentialRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(pool_error_message(error))
}

fn map_diesel_error(error: &diesel::result::Error, login_id: &str) -> UserPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::UniqueViolation => UserPersistenceError::duplicate_login_id(login_id),
        DieselFailure::Query(message) => UserPersistenceError::query(message),
    }
}

fn row_to_account(row: UserCredentialRow) -> UserAccount {
    UserAccount {
        key: UserKey::new(row.user_idx),
        nickname: row.nickname,
        credential_hash: CredentialHash::new(row.password_hash),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn login_id_exists(&self, login_id: &LoginId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            users::table.filter(users::user_id.eq(login_id.as_str())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(|err| map_diesel_error(&err, login_id.as_str()))
    }

    async fn insert(&self, account: &NewUserAccount) -> Result<UserKey, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            user_id: account.login_id.as_str(),
            password_hash: account.credential_hash.as_str(),
            nickname: account.nickname.as_str(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .returning(users::user_idx)
            .get_result::<i32>(&mut conn)
            .await
            .map(UserKey::new)
            .map_err(|err| map_diesel_error(&err, account.login_id.as_str()))
    }

    async fn find_active_by_login_id(
        &self,
        login_id: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .filter(users::user_id.eq(login_id))
            .filter(users::status.eq(UserStatus::Active.code()))
            .select(UserCredentialRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_account))
            .map_err(|err| map_diesel_error(&err, login_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unique_violation_maps_to_duplicate() {
        let error = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_owned()),
        );
        assert_eq!(
            map_diesel_error(&error, "abcdef1"),
            UserPersistenceError::duplicate_login_id("abcdef1")
        );
    }

    #[rstest]
    fn pool_checkout_maps_to_connection() {
        assert_eq!(
            map_pool_error(PoolError::checkout("timed out")),
            UserPersistenceError::connection("timed out")
        );
    }

    #[rstest]
    fn rows_become_accounts() {
        let account = row_to_account(UserCredentialRow {
            user_idx: 5,
            nickname: "nick".to_owned(),
            password_hash: "$argon2id$v=19$stub".to_owned(),
        });
        assert_eq!(account.key, UserKey::new(5));
        assert_eq!(account.credential_hash.as_str(), "$argon2id$v=19$stub");
    }
}
