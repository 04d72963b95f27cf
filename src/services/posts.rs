//! Post service - post creation, retrieval, update, deletion and the
//! aggregated single-call read path.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::Identity;
use crate::db::{comment_repo, like_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Post, PostDetail, PostPatch, UserSummary};
use crate::services::{assert_owner, require_identity};

pub struct PostService {
    pool: SqlitePool,
}

impl PostService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a post owned by the calling identity
    pub async fn create_post(
        &self,
        identity: Option<&Identity>,
        title: &str,
        content: &str,
    ) -> Result<Post> {
        let identity = require_identity(identity)?;

        let post = post_repo::create_post(&self.pool, title, content, identity.user_id).await?;
        tracing::info!(post_id = %post.id, author_id = %identity.user_id, "post created");

        Ok(post)
    }

    /// Apply a partial update to a post the caller owns. An empty patch is
    /// accepted as a no-op that returns the current state (with a refreshed
    /// modification stamp).
    pub async fn update_post(
        &self,
        identity: Option<&Identity>,
        post_id: Uuid,
        patch: &PostPatch,
    ) -> Result<Post> {
        let identity = require_identity(identity)?;

        let existing = post_repo::find_post(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {post_id} not found")))?;
        assert_owner(identity, existing.author_id)?;

        post_repo::update_post(&self.pool, post_id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {post_id} not found")))
    }

    /// Delete a post the caller owns, cascading its comments and likes
    pub async fn delete_post(&self, identity: Option<&Identity>, post_id: Uuid) -> Result<bool> {
        let identity = require_identity(identity)?;

        let existing = post_repo::find_post(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {post_id} not found")))?;
        assert_owner(identity, existing.author_id)?;

        let deleted = post_repo::delete_post(&self.pool, post_id).await?;
        if deleted {
            tracing::info!(%post_id, author_id = %identity.user_id, "post deleted");
        }

        Ok(deleted)
    }

    /// Unauthenticated read of a single post
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        Ok(post_repo::find_post(&self.pool, post_id).await?)
    }

    /// All posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(post_repo::list_posts(&self.pool).await?)
    }

    /// Posts owned by the calling identity
    pub async fn list_posts_by_author(&self, identity: Option<&Identity>) -> Result<Vec<Post>> {
        let identity = require_identity(identity)?;
        Ok(post_repo::list_posts_by_author(&self.pool, identity.user_id).await?)
    }

    /// Assemble a post together with its aggregates in one read path:
    /// author, like count, whether the viewer has liked it, and comments.
    /// Anonymous viewers never see a post as liked.
    pub async fn get_post_detail(
        &self,
        post_id: Uuid,
        viewer: Option<&Identity>,
    ) -> Result<Option<PostDetail>> {
        let Some(post) = post_repo::find_post(&self.pool, post_id).await? else {
            return Ok(None);
        };

        let author = user_repo::find_by_id(&self.pool, post.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("author of post {post_id} not found")))?;

        let like_count = like_repo::count_likes(&self.pool, post_id).await?;
        let viewer_has_liked = match viewer {
            Some(viewer) => like_repo::exists(&self.pool, post_id, viewer.user_id).await?,
            None => false,
        };
        let comments = comment_repo::list_comments_for_post(&self.pool, post_id).await?;

        Ok(Some(PostDetail {
            author: UserSummary::from(&author),
            post,
            like_count,
            viewer_has_liked,
            comments,
        }))
    }
}
