//! Comment service - comment creation, deletion and listing.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::Identity;
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Comment;
use crate::services::{assert_owner, require_identity};

pub struct CommentService {
    pool: SqlitePool,
}

impl CommentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a comment authored by the calling identity on an existing post
    pub async fn create_comment(
        &self,
        identity: Option<&Identity>,
        post_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let identity = require_identity(identity)?;

        if post_repo::find_post(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("post {post_id} not found")));
        }

        let comment =
            comment_repo::create_comment(&self.pool, post_id, identity.user_id, content).await?;
        tracing::info!(comment_id = %comment.id, %post_id, "comment created");

        Ok(comment)
    }

    /// Delete a comment the caller authored
    pub async fn delete_comment(
        &self,
        identity: Option<&Identity>,
        comment_id: Uuid,
    ) -> Result<bool> {
        let identity = require_identity(identity)?;

        let comment = comment_repo::find_comment(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {comment_id} not found")))?;
        assert_owner(identity, comment.author_id)?;

        Ok(comment_repo::delete_comment(&self.pool, comment_id).await?)
    }

    /// Unauthenticated read: comments for a post, oldest first
    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        Ok(comment_repo::list_comments_for_post(&self.pool, post_id).await?)
    }
}
