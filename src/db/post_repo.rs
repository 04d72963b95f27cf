//! Post repository - all database operations for posts.

use crate::models::{Post, PostPatch};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a new post with both timestamps set to now
pub async fn create_post(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    author_id: Uuid,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, author_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(author_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Find a post by ID
pub async fn find_post(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all posts, newest first. The id tiebreak keeps the order
/// deterministic when creation times collide.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// List posts by a specific author, newest first
pub async fn list_posts_by_author(
    pool: &SqlitePool,
    author_id: Uuid,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE author_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(author_id)
    .fetch_all(pool)
    .await
}

/// Apply a partial update: omitted fields retain their prior values,
/// `updated_at` is refreshed. Returns `None` when no such post exists;
/// ownership is not this layer's concern.
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    patch: &PostPatch,
) -> Result<Option<Post>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = COALESCE(?, title),
            content = COALESCE(?, content),
            updated_at = ?
        WHERE id = ?
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(patch.title.as_deref())
    .bind(patch.content.as_deref())
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a post together with its comments and likes in one transaction.
/// Returns true if a post row was removed.
pub async fn delete_post(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM likes WHERE post_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM comments WHERE post_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}

/// Count total posts
pub async fn count_posts(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
}

/// Count posts by author
pub async fn count_posts_by_author(
    pool: &SqlitePool,
    author_id: Uuid,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE author_id = ?")
        .bind(author_id)
        .fetch_one(pool)
        .await
}
