//! In-memory doubles for the driven ports.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use matjip::domain::ports::{
    CredentialHashError, CredentialHasher, RestaurantRepository, RestaurantRepositoryError,
    UserPersistenceError, UserRepository,
};
use matjip::domain::{
    Category, CredentialHash, LoginId, NewUserAccount, Password, Restaurant, UserAccount, UserKey,
    UserStatus,
};

#[derive(Debug, Clone)]
struct StoredUser {
    key: UserKey,
    login_id: String,
    credential_hash: CredentialHash,
    nickname: String,
    status: UserStatus,
}

/// User store keyed by login identifier that counts every call it receives.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<StoredUser>>,
    exists_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    find_calls: AtomicUsize,
}

impl InMemoryUserRepository {
    /// Seed a row directly, bypassing registration.
    pub fn seed(
        &self,
        login_id: &str,
        credential_hash: CredentialHash,
        nickname: &str,
        status: UserStatus,
    ) -> UserKey {
        let mut rows = self.rows.lock().expect("user rows lock");
        let key = next_key(&rows);
        rows.push(StoredUser {
            key,
            login_id: login_id.to_owned(),
            credential_hash,
            nickname: nickname.to_owned(),
            status,
        });
        key
    }

    /// Total number of port calls of any kind.
    pub fn total_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
            + self.insert_calls.load(Ordering::SeqCst)
            + self.find_calls.load(Ordering::SeqCst)
    }

    /// Number of inserts attempted.
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.lock().expect("user rows lock").len()
    }
}

fn next_key(rows: &[StoredUser]) -> UserKey {
    let max = rows.iter().map(|row| row.key.get()).max().unwrap_or(0);
    UserKey::new(max + 1)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn login_id_exists(&self, login_id: &LoginId) -> Result<bool, UserPersistenceError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().expect("user rows lock");
        Ok(rows.iter().any(|row| row.login_id == login_id.as_str()))
    }

    async fn insert(&self, account: &NewUserAccount) -> Result<UserKey, UserPersistenceError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().expect("user rows lock");
        if rows.iter().any(|row| row.login_id == account.login_id.as_str()) {
            return Err(UserPersistenceError::duplicate_login_id(
                account.login_id.as_str(),
            ));
        }
        let key = next_key(&rows);
        rows.push(StoredUser {
            key,
            login_id: account.login_id.as_str().to_owned(),
            credential_hash: account.credential_hash.clone(),
            nickname: account.nickname.as_str().to_owned(),
            status: UserStatus::Active,
        });
        Ok(key)
    }

    async fn find_active_by_login_id(
        &self,
        login_id: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().expect("user rows lock");
        Ok(rows
            .iter()
            .find(|row| row.login_id == login_id && row.status == UserStatus::Active)
            .map(|row| UserAccount {
                key: row.key,
                nickname: row.nickname.clone(),
                credential_hash: row.credential_hash.clone(),
            }))
    }
}

/// Restaurant store with a per-row active flag that counts listing calls.
#[derive(Debug, Default)]
pub struct InMemoryRestaurantRepository {
    rows: Vec<(Restaurant, bool)>,
    list_calls: AtomicUsize,
}

impl InMemoryRestaurantRepository {
    /// Build a store from `(title, category, active)` triples.
    pub fn with_rows(rows: &[(&str, Category, bool)]) -> Self {
        let rows = rows
            .iter()
            .map(|(title, category, active)| {
                (
                    Restaurant {
                        title: (*title).to_owned(),
                        address: format!("{title} street"),
                        category: category.as_str().to_owned(),
                        video_url: format!("https://video.example/{title}"),
                    },
                    *active,
                )
            })
            .collect();
        Self {
            rows,
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Number of listing calls received.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn list_active(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .iter()
            .filter(|(_, active)| *active)
            .filter(|(row, _)| category.is_none_or(|wanted| row.category == wanted.as_str()))
            .map(|(row, _)| row.clone())
            .collect())
    }
}

/// Cheap reversible hasher so tests avoid Argon2 cost.
///
/// Clones share one verification counter.
#[derive(Debug, Default, Clone)]
pub struct PlainHasher {
    verify_calls: Arc<AtomicUsize>,
}

const PLAIN_PREFIX: &str = "plain$";
const DECOY_HASH: &str = "decoy$";

impl PlainHasher {
    /// Hash as stored by this double.
    pub fn hash_of(password: &str) -> CredentialHash {
        CredentialHash::new(format!("{PLAIN_PREFIX}{password}"))
    }

    /// Number of verifications run, decoy checks included.
    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialHasher for PlainHasher {
    async fn hash(&self, password: &Password) -> Result<CredentialHash, CredentialHashError> {
        Ok(Self::hash_of(password.expose()))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &CredentialHash,
    ) -> Result<bool, CredentialHashError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if hash.as_str() == DECOY_HASH {
            return Ok(false);
        }
        match hash.as_str().strip_prefix(PLAIN_PREFIX) {
            Some(stored) => Ok(stored == password),
            None => Err(CredentialHashError::malformed_hash("missing plain prefix")),
        }
    }

    fn decoy_hash(&self) -> CredentialHash {
        CredentialHash::new(DECOY_HASH)
    }
}
