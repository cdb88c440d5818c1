mod common;

use intern_registry_core::auth::Credentials;
use intern_registry_core::domains::user::types::UpdateUser;
use intern_registry_core::errors::{DomainError, ServiceError};

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn assert_rejected(err: ServiceError) {
    match err {
        ServiceError::Authentication(msg) => assert_eq!(msg, "Invalid email or password"),
        other => panic!("expected authentication failure, got {:?}", other),
    }
}

#[tokio::test]
async fn login_issues_a_verifiable_token() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "login@example.com").await;

    let result = services
        .auth
        .login(credentials("login@example.com", common::TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(result.user.id, user.id);
    assert_eq!(result.user.email, "login@example.com");

    let payload = services.auth.verify_token(&result.token).unwrap();
    assert_eq!(payload.user_id, user.id);
    assert_eq!(payload.role.as_deref(), Some("intern"));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let (_pool, services) = common::registry().await;
    common::create_user(&services, "wrong@example.com").await;

    let err = services
        .auth
        .login(credentials("wrong@example.com", "not-the-password"))
        .await
        .unwrap_err();
    assert_rejected(err);
}

#[tokio::test]
async fn unknown_email_is_rejected() {
    let (_pool, services) = common::registry().await;

    let err = services
        .auth
        .login(credentials("nobody@example.com", common::TEST_PASSWORD))
        .await
        .unwrap_err();
    assert_rejected(err);
}

#[tokio::test]
async fn soft_deleted_user_cannot_log_in() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "left@example.com").await;
    services.users.delete_user(user.id).await.unwrap();

    let err = services
        .auth
        .login(credentials("left@example.com", common::TEST_PASSWORD))
        .await
        .unwrap_err();
    assert_rejected(err);
}

#[tokio::test]
async fn password_change_takes_effect() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "rotate@example.com").await;

    services
        .users
        .update_user(
            user.id,
            UpdateUser {
                password: Some("a-brand-new-secret".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(services
        .auth
        .login(credentials("rotate@example.com", common::TEST_PASSWORD))
        .await
        .is_err());
    assert!(services
        .auth
        .login(credentials("rotate@example.com", "a-brand-new-secret"))
        .await
        .is_ok());
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let (_pool, services) = common::registry().await;
    common::create_user(&services, "dup@example.com").await;

    let err = services
        .users
        .create_user(common::new_user("dup@example.com"))
        .await
        .unwrap_err();
    match err {
        ServiceError::Domain(DomainError::Conflict(msg)) => {
            assert_eq!(msg, "User with email dup@example.com already exists")
        }
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn stored_hash_is_not_the_plain_password() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "hash@example.com").await;
    assert_ne!(user.password_hash, common::TEST_PASSWORD);
    assert!(user.password_hash.starts_with("$argon2"));
}
