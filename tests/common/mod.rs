//! Shared test fixtures: an in-memory store with migrations applied and
//! helpers for creating users and identities.
#![allow(dead_code)]

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use ripple_content::auth::jwt::Jwt;
use ripple_content::auth::Identity;
use ripple_content::config::JwtConfig;
use ripple_content::models::User;
use ripple_content::services::UserService;

/// A single-connection in-memory SQLite pool with the schema applied.
/// One connection keeps every handle on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    sqlx::migrate!().run(&pool).await.expect("migrations apply");

    pool
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".into(),
        issuer: "ripple-content".into(),
        expiration_hours: 1,
    }
}

pub fn test_jwt() -> Jwt {
    Jwt::new(&test_jwt_config())
}

/// Register a user and return it with its identity
pub async fn register_user(pool: &SqlitePool, username: &str) -> (User, Identity) {
    let service = UserService::new(pool.clone(), test_jwt());
    let user = service
        .register(
            username,
            &format!("{username}@example.com"),
            username,
            "hunter2",
        )
        .await
        .expect("register user");

    let identity = Identity {
        user_id: user.id,
        username: user.username.clone(),
    };

    (user, identity)
}
