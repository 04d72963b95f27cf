//! Like repository - all database operations for likes.
//!
//! Like existence for a (post, user) pair is a set membership fact. The
//! UNIQUE(post_id, user_id) constraint is the final arbiter under races:
//! `create_like` is a raw insert and lets the violation propagate for the
//! service layer to recover.

use crate::models::Like;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Insert a like row. A second insert for the same pair fails with a
/// unique violation rather than duplicating the row.
pub async fn create_like(
    pool: &SqlitePool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Like, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO likes (id, post_id, user_id, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, post_id, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(post_id)
    .bind(user_id)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Find the like for a (post, user) pair
pub async fn find_like(
    pool: &SqlitePool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Like>, sqlx::Error> {
    sqlx::query_as::<_, Like>(
        r#"
        SELECT id, post_id, user_id, created_at
        FROM likes
        WHERE post_id = ? AND user_id = ?
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete the like for a (post, user) pair. Returns true if a row was
/// removed, false if none existed.
pub async fn delete_like(
    pool: &SqlitePool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM likes WHERE post_id = ? AND user_id = ?")
        .bind(post_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Existence check for a (post, user) pair without loading the row
pub async fn exists(pool: &SqlitePool, post_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM likes WHERE post_id = ? AND user_id = ?)
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Count likes for a post without loading the rows
pub async fn count_likes(pool: &SqlitePool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE post_id = ?")
        .bind(post_id)
        .fetch_one(pool)
        .await
}
