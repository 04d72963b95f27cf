//! Like service - the two-state toggle per (post, user) pair.
//!
//! Liking is idempotent: liking an already-liked post returns the existing
//! row, unliking a never-liked post returns false. Under concurrent
//! duplicate requests the store's uniqueness constraint is the arbiter;
//! a violation during creation is re-interpreted as "already liked".

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::Identity;
use crate::db::{like_repo, post_repo};
use crate::error::{is_unique_violation, AppError, Result};
use crate::models::Like;
use crate::services::require_identity;

pub struct LikeService {
    pool: SqlitePool,
}

impl LikeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Like a post. Returns the existing like unchanged when the pair is
    /// already in the liked state.
    pub async fn like(&self, identity: Option<&Identity>, post_id: Uuid) -> Result<Like> {
        let identity = require_identity(identity)?;

        if post_repo::find_post(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("post {post_id} not found")));
        }

        match like_repo::create_like(&self.pool, post_id, identity.user_id).await {
            Ok(like) => Ok(like),
            Err(err) if is_unique_violation(&err) => {
                // Lost the race (or the pair was already liked): the row
                // that won is the one to return.
                tracing::debug!(%post_id, user_id = %identity.user_id, "like already exists");
                like_repo::find_like(&self.pool, post_id, identity.user_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::Conflict("like disappeared during replay".to_string())
                    })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Unlike a post. Returns false, not an error, when no like existed.
    pub async fn unlike(&self, identity: Option<&Identity>, post_id: Uuid) -> Result<bool> {
        let identity = require_identity(identity)?;

        if post_repo::find_post(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("post {post_id} not found")));
        }

        Ok(like_repo::delete_like(&self.pool, post_id, identity.user_id).await?)
    }

    /// Count of likes for a post; loads no rows
    pub async fn like_count(&self, post_id: Uuid) -> Result<i64> {
        Ok(like_repo::count_likes(&self.pool, post_id).await?)
    }

    /// Whether the viewer has liked the post. Always false for anonymous
    /// viewers, regardless of like rows present.
    pub async fn is_liked_by(&self, post_id: Uuid, viewer: Option<&Identity>) -> Result<bool> {
        match viewer {
            Some(viewer) => Ok(like_repo::exists(&self.pool, post_id, viewer.user_id).await?),
            None => Ok(false),
        }
    }
}
