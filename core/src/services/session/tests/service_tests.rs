//! Unit tests for the session facade

use std::sync::Arc;

use crate::domain::entities::principal::Principal;
use crate::domain::value_objects::LoginCredentials;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{refresh_key, MockRevocationStore, MockUserRepository, RevocationStore};
use crate::services::session::SessionService;
use crate::services::token::{ManualClock, TokenService, TokenServiceConfig};

type TestSession = SessionService<MockUserRepository, MockRevocationStore, ManualClock>;

fn create_test_session() -> (TestSession, MockUserRepository, MockRevocationStore, ManualClock) {
    let clock = ManualClock::new(1_700_000_000);
    let store = MockRevocationStore::new(clock.clone());
    let users = MockUserRepository::with_demo_user();
    let tokens = TokenService::with_clock(
        store.clone(),
        TokenServiceConfig::new("test-access-secret", "test-refresh-secret"),
        clock.clone(),
    )
    .unwrap();
    let session = SessionService::new(Arc::new(users.clone()), Arc::new(tokens));
    (session, users, store, clock)
}

fn demo_credentials() -> LoginCredentials {
    LoginCredentials::new("test@example.com", "password")
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let (session, _users, _store, clock) = create_test_session();

    let login = session.login(&demo_credentials()).await.unwrap();
    assert_eq!(login.user.id, "1");
    assert_eq!(login.user.role, "user");
    assert!(session.verify(&login.tokens.access_token).await);

    clock.advance(16);
    assert!(!session.verify(&login.tokens.access_token).await);

    let refreshed = session.refresh(&login.tokens.refresh_token).await.unwrap();
    assert!(session.verify(&refreshed.access_token).await);

    session.logout(&refreshed.access_token, "1").await.unwrap();
    assert_eq!(
        session.who_am_i(&refreshed.access_token).await,
        Err(DomainError::Token(TokenError::InvalidToken))
    );
    assert!(!session.verify(&refreshed.access_token).await);
    assert_eq!(
        session.refresh(&refreshed.refresh_token).await,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    );
}

#[tokio::test]
async fn test_login_in_same_second_as_logout_is_usable() {
    let (session, _users, _store, _clock) = create_test_session();

    let first = session.login(&demo_credentials()).await.unwrap();
    session.logout(&first.tokens.access_token, "1").await.unwrap();
    assert!(!session.verify(&first.tokens.access_token).await);

    let second = session.login(&demo_credentials()).await.unwrap();

    assert_eq!(second.tokens.access_token, first.tokens.access_token);
    assert!(session.verify(&second.tokens.access_token).await);
    assert_eq!(
        session.who_am_i(&second.tokens.access_token).await.unwrap().id,
        "1"
    );
}

#[tokio::test]
async fn test_wrong_password_performs_no_store_writes() {
    let (session, _users, store, _clock) = create_test_session();

    let result = session
        .login(&LoginCredentials::new("test@example.com", "wrong"))
        .await;

    assert_eq!(result, Err(DomainError::Auth(AuthError::AuthenticationFailed)));
    assert_eq!(store.write_count(), 0);
    assert_eq!(store.get(&refresh_key("1")).await.unwrap(), None);
}

#[tokio::test]
async fn test_unknown_email_fails_authentication() {
    let (session, _users, store, _clock) = create_test_session();

    let result = session
        .login(&LoginCredentials::new("nobody@example.com", "password"))
        .await;

    assert_eq!(result, Err(DomainError::Auth(AuthError::AuthenticationFailed)));
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_who_am_i_returns_principal() {
    let (session, _users, _store, _clock) = create_test_session();
    let login = session.login(&demo_credentials()).await.unwrap();

    let principal = session.who_am_i(&login.tokens.access_token).await.unwrap();
    assert_eq!(
        principal,
        Principal::new("1", "test@example.com", "Test User", "user")
    );
}

#[tokio::test]
async fn test_who_am_i_rejects_garbage_and_expired() {
    let (session, _users, _store, clock) = create_test_session();
    let login = session.login(&demo_credentials()).await.unwrap();

    assert_eq!(
        session.who_am_i("garbage").await,
        Err(DomainError::Token(TokenError::InvalidToken))
    );

    clock.advance(15);
    assert_eq!(
        session.who_am_i(&login.tokens.access_token).await,
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[tokio::test]
async fn test_who_am_i_reports_store_outage() {
    let (session, _users, store, _clock) = create_test_session();
    let login = session.login(&demo_credentials()).await.unwrap();

    store.set_unavailable(true);

    assert!(matches!(
        session.who_am_i(&login.tokens.access_token).await,
        Err(DomainError::StoreUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_authorize_checks_role() {
    let (session, users, _store, _clock) = create_test_session();
    users.insert(
        Principal::new("2", "admin@example.com", "Admin", "admin"),
        "secret",
    );

    let user = session.login(&demo_credentials()).await.unwrap();
    let admin = session
        .login(&LoginCredentials::new("admin@example.com", "secret"))
        .await
        .unwrap();

    assert!(session.authorize(&user.tokens.access_token, None).await.is_ok());
    assert_eq!(
        session
            .authorize(&user.tokens.access_token, Some("admin"))
            .await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    );
    assert_eq!(
        session
            .authorize(&admin.tokens.access_token, Some("admin"))
            .await
            .unwrap()
            .id,
        "2"
    );
    assert_eq!(
        session.authorize("garbage", Some("admin")).await,
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[tokio::test]
async fn test_logout_reports_store_outage() {
    let (session, _users, store, _clock) = create_test_session();
    let login = session.login(&demo_credentials()).await.unwrap();

    store.set_unavailable(true);

    assert!(matches!(
        session.logout(&login.tokens.access_token, "1").await,
        Err(DomainError::StoreUnavailable { .. })
    ));
}
