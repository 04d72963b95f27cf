//! Business logic layer.
//!
//! One service struct per entity family, each owning a pool handle. Every
//! operation takes the caller's identity (or its absence) explicitly;
//! there is no ambient or default identity anywhere in this layer.

pub mod comments;
pub mod likes;
pub mod posts;
pub mod users;

pub use comments::CommentService;
pub use likes::LikeService;
pub use posts::PostService;
pub use users::UserService;

use uuid::Uuid;

use crate::auth::Identity;
use crate::error::{AppError, Result};

/// Reject anonymous callers on operations that require an identity
pub fn require_identity(identity: Option<&Identity>) -> Result<&Identity> {
    identity.ok_or(AppError::Unauthenticated)
}

/// Reject callers that do not own the resource. Compares user identifiers
/// only; usernames and display names are never part of an ownership check.
pub fn assert_owner(identity: &Identity, owner_id: Uuid) -> Result<()> {
    if identity.user_id == owner_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "you are not the owner of this resource".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(user_id: Uuid) -> Identity {
        Identity {
            user_id,
            username: "owner".into(),
        }
    }

    #[test]
    fn require_identity_rejects_anonymous() {
        assert!(matches!(
            require_identity(None),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn assert_owner_matches_on_id_only() {
        let id = Uuid::new_v4();
        let caller = identity(id);
        assert!(assert_owner(&caller, id).is_ok());
        assert!(matches!(
            assert_owner(&caller, Uuid::new_v4()),
            Err(AppError::Forbidden(_))
        ));
    }
}
