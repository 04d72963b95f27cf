//! User service - registration and login.
//!
//! Registration follows the same constraint-as-arbiter pattern as likes:
//! the insert goes first and a unique violation on the username surfaces
//! as a conflict, rather than trusting a prior existence check.

use sqlx::SqlitePool;

use crate::auth::jwt::Jwt;
use crate::auth::password;
use crate::db::user_repo;
use crate::error::{is_unique_violation, AppError, Result};
use crate::models::User;

pub struct UserService {
    pool: SqlitePool,
    jwt: Jwt,
}

impl UserService {
    pub fn new(pool: SqlitePool, jwt: Jwt) -> Self {
        Self { pool, jwt }
    }

    /// Create a new user with a salted password hash
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<User> {
        if username.trim().is_empty() {
            return Err(AppError::Validation("username must not be empty".into()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("password must not be empty".into()));
        }

        let salt = password::generate_salt();
        let hash = password::hash_password(password, &salt);

        match user_repo::create_user(&self.pool, username, email, name, &hash, &salt).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, username, "user registered");
                Ok(user)
            }
            Err(err) if is_unique_violation(&err) => Err(AppError::Conflict(format!(
                "username '{username}' already exists"
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Authenticate with username and password, issuing a signed token on
    /// success. `None` for an unknown user or a wrong password; the two
    /// are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<(User, String)>> {
        let Some(user) = user_repo::find_by_username(&self.pool, username).await? else {
            return Ok(None);
        };

        if !password::verify_password(password, &user.salt, &user.password_hash) {
            tracing::debug!(username, "login rejected");
            return Ok(None);
        }

        let token = self.jwt.issue(&user)?;
        Ok(Some((user, token)))
    }
}
