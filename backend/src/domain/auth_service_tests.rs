//! Tests for the authentication service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockCredentialHasher, MockSessionTokenService, MockUserRepository};
use crate::domain::{CredentialHash, ErrorCode, UserAccount, UserKey};

type TestService = AuthService<MockUserRepository, MockCredentialHasher, MockSessionTokenService>;

fn service(
    users: MockUserRepository,
    hasher: MockCredentialHasher,
    tokens: MockSessionTokenService,
) -> TestService {
    AuthService::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens))
}

fn registration() -> Registration {
    Registration::try_from_parts("abcdef1", "password123", "nick").expect("valid registration")
}

fn credentials() -> LoginCredentials {
    LoginCredentials::try_from_parts("abcdef1", "password123").expect("credentials shape")
}

fn stored_account() -> UserAccount {
    UserAccount {
        key: UserKey::new(7),
        nickname: "nick".to_owned(),
        credential_hash: CredentialHash::new("$argon2id$stored"),
    }
}

fn hasher_returning(hash: &'static str) -> MockCredentialHasher {
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_hash()
        .times(1)
        .returning(move |_| Ok(CredentialHash::new(hash)));
    hasher
}

fn tokens_expecting(identity: SessionIdentity) -> MockSessionTokenService {
    let mut tokens = MockSessionTokenService::new();
    tokens
        .expect_issue()
        .with(eq(identity))
        .times(1)
        .returning(|_| Ok(SessionToken::new("signed")));
    tokens
}

#[tokio::test]
async fn register_inserts_and_mints_token() {
    let mut users = MockUserRepository::new();
    users
        .expect_login_id_exists()
        .times(1)
        .returning(|_| Ok(false));
    users
        .expect_insert()
        .withf(|account| {
            account.login_id.as_str() == "abcdef1"
                && account.nickname.as_str() == "nick"
                && account.credential_hash.as_str() == "$argon2id$new"
        })
        .times(1)
        .returning(|_| Ok(UserKey::new(42)));

    let service = service(
        users,
        hasher_returning("$argon2id$new"),
        tokens_expecting(SessionIdentity::new(UserKey::new(42), "nick")),
    );

    let token = service
        .register(&registration())
        .await
        .expect("registration succeeds");
    assert_eq!(token.as_str(), "signed");
}

#[tokio::test]
async fn register_rejects_taken_identifier_without_insert() {
    let mut users = MockUserRepository::new();
    users
        .expect_login_id_exists()
        .times(1)
        .returning(|_| Ok(true));
    users.expect_insert().times(0);
    let mut hasher = MockCredentialHasher::new();
    hasher.expect_hash().times(0);
    let mut tokens = MockSessionTokenService::new();
    tokens.expect_issue().times(0);

    let error = service(users, hasher, tokens)
        .register(&registration())
        .await
        .expect_err("duplicate must be rejected");

    assert_eq!(error.code(), ErrorCode::Rejected);
    assert_eq!(error.message(), DUPLICATE_LOGIN_ID_MESSAGE);
}

#[tokio::test]
async fn register_maps_unique_violation_to_duplicate_rejection() {
    let mut users = MockUserRepository::new();
    users
        .expect_login_id_exists()
        .times(1)
        .returning(|_| Ok(false));
    users
        .expect_insert()
        .times(1)
        .returning(|_| Err(UserPersistenceError::duplicate_login_id("abcdef1")));
    let mut tokens = MockSessionTokenService::new();
    tokens.expect_issue().times(0);

    let error = service(users, hasher_returning("$argon2id$new"), tokens)
        .register(&registration())
        .await
        .expect_err("race loser must be rejected");

    assert_eq!(error.code(), ErrorCode::Rejected);
    assert_eq!(error.message(), DUPLICATE_LOGIN_ID_MESSAGE);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn register_maps_store_failures(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut users = MockUserRepository::new();
    users
        .expect_login_id_exists()
        .times(1)
        .return_once(move |_| Err(failure));
    users.expect_insert().times(0);

    let error = service(
        users,
        MockCredentialHasher::new(),
        MockSessionTokenService::new(),
    )
    .register(&registration())
    .await
    .expect_err("store failure propagates");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn register_surfaces_signing_failure_as_internal() {
    let mut users = MockUserRepository::new();
    users.expect_login_id_exists().returning(|_| Ok(false));
    users.expect_insert().returning(|_| Ok(UserKey::new(1)));
    let mut tokens = MockSessionTokenService::new();
    tokens
        .expect_issue()
        .returning(|_| Err(SessionTokenError::signing("bad key")));

    let error = service(users, hasher_returning("$argon2id$new"), tokens)
        .register(&registration())
        .await
        .expect_err("signing failure propagates");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn login_mints_token_for_matching_account() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_active_by_login_id()
        .withf(|login_id| login_id == "abcdef1")
        .times(1)
        .returning(|_| Ok(Some(stored_account())));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_verify()
        .withf(|password, hash| password == "password123" && hash.as_str() == "$argon2id$stored")
        .times(1)
        .returning(|_, _| Ok(true));

    let token = service(
        users,
        hasher,
        tokens_expecting(SessionIdentity::new(UserKey::new(7), "nick")),
    )
    .login(&credentials())
    .await
    .expect("login succeeds");

    assert_eq!(token.as_str(), "signed");
}

#[tokio::test]
async fn login_rejects_unknown_account() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_active_by_login_id()
        .times(1)
        .returning(|_| Ok(None));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_decoy_hash()
        .times(1)
        .returning(|| CredentialHash::new("$argon2id$decoy"));
    hasher
        .expect_verify()
        .withf(|password, hash| password == "password123" && hash.as_str() == "$argon2id$decoy")
        .times(1)
        .returning(|_, _| Ok(false));
    let mut tokens = MockSessionTokenService::new();
    tokens.expect_issue().times(0);

    let error = service(users, hasher, tokens)
        .login(&credentials())
        .await
        .expect_err("unknown account");

    assert_eq!(error.code(), ErrorCode::Rejected);
    assert_eq!(error.message(), LOGIN_REJECTED_MESSAGE);
}

#[tokio::test]
async fn login_rejects_unknown_account_even_when_decoy_check_fails() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_active_by_login_id()
        .returning(|_| Ok(None));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_decoy_hash()
        .returning(|| CredentialHash::new("$argon2id$decoy"));
    hasher
        .expect_verify()
        .times(1)
        .returning(|_, _| Err(CredentialHashError::worker("cancelled")));

    let error = service(users, hasher, MockSessionTokenService::new())
        .login(&credentials())
        .await
        .expect_err("unknown account");

    assert_eq!(error.code(), ErrorCode::Rejected);
    assert_eq!(error.message(), LOGIN_REJECTED_MESSAGE);
}

#[tokio::test]
async fn login_rejects_wrong_password_with_same_message() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_active_by_login_id()
        .returning(|_| Ok(Some(stored_account())));
    let mut hasher = MockCredentialHasher::new();
    hasher.expect_verify().returning(|_, _| Ok(false));
    let mut tokens = MockSessionTokenService::new();
    tokens.expect_issue().times(0);

    let error = service(users, hasher, tokens)
        .login(&credentials())
        .await
        .expect_err("wrong password");

    assert_eq!(error.code(), ErrorCode::Rejected);
    assert_eq!(error.message(), LOGIN_REJECTED_MESSAGE);
}

#[tokio::test]
async fn login_maps_malformed_hash_to_internal() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_active_by_login_id()
        .returning(|_| Ok(Some(stored_account())));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_verify()
        .returning(|_, _| Err(CredentialHashError::malformed_hash("not phc")));

    let error = service(users, hasher, MockSessionTokenService::new())
        .login(&credentials())
        .await
        .expect_err("malformed hash");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn login_maps_connection_failure_to_service_unavailable() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_active_by_login_id()
        .returning(|_| Err(UserPersistenceError::connection("timeout")));

    let error = service(
        users,
        MockCredentialHasher::new(),
        MockSessionTokenService::new(),
    )
    .login(&credentials())
    .await
    .expect_err("connection failure");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[case(SessionTokenError::expired(), ErrorCode::Unauthorized)]
#[case(SessionTokenError::invalid("bad signature"), ErrorCode::Unauthorized)]
#[case(SessionTokenError::signing("broken key"), ErrorCode::InternalError)]
fn verify_maps_token_errors(#[case] failure: SessionTokenError, #[case] expected: ErrorCode) {
    let mut tokens = MockSessionTokenService::new();
    tokens.expect_verify().return_once(move |_| Err(failure));

    let error = service(MockUserRepository::new(), MockCredentialHasher::new(), tokens)
        .verify("token")
        .expect_err("token rejected");

    assert_eq!(error.code(), expected);
}

#[rstest]
fn verify_returns_embedded_identity() {
    let mut tokens = MockSessionTokenService::new();
    tokens
        .expect_verify()
        .withf(|token| token == "token")
        .returning(|_| Ok(SessionIdentity::new(UserKey::new(3), "nick")));

    let identity = service(MockUserRepository::new(), MockCredentialHasher::new(), tokens)
        .verify("token")
        .expect("valid token");

    assert_eq!(identity, SessionIdentity::new(UserKey::new(3), "nick"));
}
