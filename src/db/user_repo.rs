//! User repository - all database operations for users.

use crate::models::User;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a new user. The unique index on `username` rejects collisions;
/// the violation propagates as a `sqlx::Error` for the caller to map.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    name: &str,
    password_hash: &str,
    salt: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, name, password_hash, salt, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, username, email, name, password_hash, salt, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .bind(salt)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Find a user by ID
pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, name, password_hash, salt, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Find a user by username
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, name, password_hash, salt, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Check whether a username is already taken
pub async fn username_exists(pool: &SqlitePool, username: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)
        "#,
    )
    .bind(username)
    .fetch_one(pool)
    .await
}
