//! Comment repository - all database operations for comments.

use crate::models::Comment;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a new comment on a post
pub async fn create_comment(
    pool: &SqlitePool,
    post_id: Uuid,
    author_id: Uuid,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, content, post_id, author_id, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, content, post_id, author_id, created_at
        "#,
    )
    .bind(id)
    .bind(content)
    .bind(post_id)
    .bind(author_id)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Find a comment by ID
pub async fn find_comment(pool: &SqlitePool, id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, post_id, author_id, created_at
        FROM comments
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List comments for a post, oldest first
pub async fn list_comments_for_post(
    pool: &SqlitePool,
    post_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, post_id, author_id, created_at
        FROM comments
        WHERE post_id = ?
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Delete a comment by ID. Returns true if a row was removed.
pub async fn delete_comment(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count comments for a post
pub async fn count_comments_for_post(
    pool: &SqlitePool,
    post_id: Uuid,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE post_id = ?")
        .bind(post_id)
        .fetch_one(pool)
        .await
}
