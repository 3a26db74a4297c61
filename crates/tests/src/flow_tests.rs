use auth_client::{login, logout, KeyValueStore};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Session, UserRole};

use crate::common::{self, FakeAuthService, TOKEN_KEY};

#[tokio::test]
async fn remembered_login_stores_long_lived_token() {
    let (long_lived, session_lived, credentials) = common::scopes();
    let service = FakeAuthService::verifies_as("teacher");

    let user = login(&credentials, &service, "ana@sunnyside.example", "pw", true)
        .await
        .unwrap();

    assert_eq!(user.role, "teacher");
    assert_eq!(long_lived.get(TOKEN_KEY).as_deref(), Some("issued-token"));
    assert_eq!(session_lived.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn unremembered_login_stores_session_token() {
    let (long_lived, session_lived, credentials) = common::scopes();
    long_lived.set(TOKEN_KEY, "old").unwrap();
    let service = FakeAuthService::verifies_as("parent");

    login(&credentials, &service, "sam@family.example", "pw", false)
        .await
        .unwrap();

    assert_eq!(session_lived.get(TOKEN_KEY).as_deref(), Some("issued-token"));
    assert_eq!(long_lived.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let (long_lived, session_lived, credentials) = common::scopes();
    let service = FakeAuthService::rejecting();

    let err = login(&credentials, &service, "x@y.example", "wrong", true)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(long_lived.get(TOKEN_KEY), None);
    assert_eq!(session_lived.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn blank_fields_are_rejected_before_calling_the_service() {
    let (_long_lived, _session_lived, credentials) = common::scopes();
    let service = FakeAuthService::verifies_as("admin");

    let err = login(&credentials, &service, "   ", "", true).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn logout_clears_both_scopes() {
    let (long_lived, session_lived, credentials) = common::scopes();
    long_lived.set(TOKEN_KEY, "abc").unwrap();
    session_lived.set(TOKEN_KEY, "def").unwrap();
    let service = FakeAuthService::verifies_as("admin");

    logout(&credentials, &service).await;

    assert_eq!(service.calls(), vec!["logout:abc".to_string()]);
    assert_eq!(long_lived.get(TOKEN_KEY), None);
    assert_eq!(session_lived.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn logout_clears_locally_when_service_is_down() {
    let (long_lived, _session_lived, credentials) = common::scopes();
    long_lived.set(TOKEN_KEY, "abc").unwrap();

    logout(&credentials, &FakeAuthService::unreachable()).await;

    assert_eq!(credentials.load_token(), None);
}

#[tokio::test]
async fn logout_without_token_skips_the_service() {
    let (_long_lived, _session_lived, credentials) = common::scopes();
    let service = FakeAuthService::verifies_as("admin");

    logout(&credentials, &service).await;

    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn login_then_logout_drives_the_session() {
    let (_long_lived, _session_lived, credentials) = common::scopes();
    let service = FakeAuthService::verifies_as("parent");
    let mut session = Session::resolved(None);

    let user = login(&credentials, &service, "sam@family.example", "pw", true)
        .await
        .unwrap();
    session.login(user);
    assert_eq!(session.role(), Some(UserRole::Parent));

    logout(&credentials, &service).await;
    session.logout();
    assert_eq!(session, Session::Anonymous);
    assert!(!session.is_loading());
}
