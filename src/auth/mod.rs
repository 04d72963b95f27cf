//! Identity resolution and credential handling.

pub mod jwt;
pub mod password;

use serde::Serialize;
use uuid::Uuid;

/// The resolved user associated with the current caller. Absence of an
/// identity means anonymous access. Ownership checks compare `user_id`
/// only, never mutable fields such as the username.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
}
