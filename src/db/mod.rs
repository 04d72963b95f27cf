//! Entity store: connection pooling and one repository module per entity.
//!
//! Repositories are free async functions over a pool reference. Each
//! operation is a single statement (or a single transaction where a
//! read-then-write must be atomic), so the store itself serializes
//! conflicting writers. Ownership is never checked at this layer.

pub mod comment_repo;
pub mod like_repo;
pub mod post_repo;
pub mod user_repo;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Connect to the database, enforce foreign keys on every connection and
/// apply pending migrations.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!(url, max_connections, "database pool ready");
    Ok(pool)
}
