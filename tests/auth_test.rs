//! Registration, login, and token-to-identity resolution.

mod common;

use common::{register_user, test_jwt, test_pool};
use ripple_content::error::AppError;
use ripple_content::services::UserService;

#[tokio::test]
async fn register_then_login_round_trip() {
    let pool = test_pool().await;
    let users = UserService::new(pool.clone(), test_jwt());

    let user = users
        .register("alice", "alice@example.com", "Alice", "hunter2")
        .await
        .unwrap();
    assert_eq!(user.username, "alice");
    assert_ne!(user.password_hash, "hunter2");

    let (logged_in, token) = users.login("alice", "hunter2").await.unwrap().unwrap();
    assert_eq!(logged_in.id, user.id);
    assert!(!token.is_empty());
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let pool = test_pool().await;
    let users = UserService::new(pool.clone(), test_jwt());

    users
        .register("alice", "alice@example.com", "Alice", "hunter2")
        .await
        .unwrap();

    assert!(users.login("alice", "wrong").await.unwrap().is_none());
    assert!(users.login("nobody", "hunter2").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let pool = test_pool().await;
    let users = UserService::new(pool.clone(), test_jwt());

    users
        .register("alice", "alice@example.com", "Alice", "hunter2")
        .await
        .unwrap();

    let err = users
        .register("alice", "other@example.com", "Other", "hunter2")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn empty_credentials_are_rejected() {
    let pool = test_pool().await;
    let users = UserService::new(pool.clone(), test_jwt());

    assert!(matches!(
        users.register("", "a@example.com", "A", "pw").await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        users.register("a", "a@example.com", "A", "").await,
        Err(AppError::Validation(_))
    ));
}

#[tokio::test]
async fn token_resolves_to_the_issuing_user() {
    let pool = test_pool().await;
    let jwt = test_jwt();
    let (user, _identity) = register_user(&pool, "alice").await;

    let token = jwt.issue(&user).unwrap();

    let identity = jwt.resolve(&pool, Some(&token)).await.unwrap().unwrap();
    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.username, "alice");
}

#[tokio::test]
async fn bad_or_missing_tokens_resolve_to_anonymous() {
    let pool = test_pool().await;
    let jwt = test_jwt();
    register_user(&pool, "alice").await;

    assert!(jwt.resolve(&pool, None).await.unwrap().is_none());
    assert!(jwt
        .resolve(&pool, Some("garbage.token.here"))
        .await
        .unwrap()
        .is_none());
    assert!(jwt.resolve(&pool, Some("")).await.unwrap().is_none());
}

#[tokio::test]
async fn token_for_an_unknown_user_resolves_to_anonymous() {
    let pool = test_pool().await;
    let jwt = test_jwt();

    // Issue against a user that was never stored.
    let ghost = ripple_content::models::User {
        id: uuid::Uuid::new_v4(),
        username: "ghost".into(),
        email: "ghost@example.com".into(),
        name: "Ghost".into(),
        password_hash: String::new(),
        salt: String::new(),
        created_at: chrono::Utc::now(),
    };
    let token = jwt.issue(&ghost).unwrap();

    assert!(jwt.resolve(&pool, Some(&token)).await.unwrap().is_none());
}
