//! Token issuance and identity resolution (HS256 JWTs).
//!
//! `resolve` is the identity resolver consumed by the API surface: it maps
//! a bearer token (or its absence) to `Option<Identity>`. Malformed,
//! expired, or unknown-user tokens yield `None`, never an error; only a
//! store failure during the user lookup propagates.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::Identity;
use crate::config::JwtConfig;
use crate::db::user_repo;
use crate::models::User;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username at issuance time (informational; identity is the id)
    pub username: String,
    /// Issuer
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token signer and verifier, built once from configuration
#[derive(Clone)]
pub struct Jwt {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expiration_hours: i64,
}

impl Jwt {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            expiration_hours: config.expiration_hours,
        }
    }

    /// Issue a signed access token for a user
    pub fn issue(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiration_hours)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify a token and extract its claims. `None` on any verification
    /// failure: bad signature, wrong issuer, expiry, garbage input.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .ok()
    }

    /// Resolve a bearer token to the calling user's identity. Returns
    /// `None` for a missing token, an invalid token, a non-UUID subject,
    /// or a user that no longer exists.
    pub async fn resolve(
        &self,
        pool: &SqlitePool,
        token: Option<&str>,
    ) -> Result<Option<Identity>, sqlx::Error> {
        let Some(claims) = token.and_then(|t| self.verify(t)) else {
            return Ok(None);
        };

        let Ok(user_id) = Uuid::parse_str(&claims.sub) else {
            tracing::warn!("token carried a non-UUID subject");
            return Ok(None);
        };

        Ok(user_repo::find_by_id(pool, user_id).await?.map(|user| Identity {
            user_id: user.id,
            username: user.username,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_jwt() -> Jwt {
        Jwt::new(&JwtConfig {
            secret: "unit-test-secret".into(),
            issuer: "ripple-content".into(),
            expiration_hours: 1,
        })
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            name: "Alice".into(),
            password_hash: String::new(),
            salt: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issue_then_verify() {
        let jwt = test_jwt();
        let user = test_user();

        let token = jwt.issue(&user).unwrap();
        let claims = jwt.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.iss, "ripple-content");
    }

    #[test]
    fn garbage_token_verifies_to_none() {
        let jwt = test_jwt();
        assert!(jwt.verify("not-a-token").is_none());
        assert!(jwt.verify("").is_none());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let jwt = test_jwt();
        let other = Jwt::new(&JwtConfig {
            secret: "other-secret".into(),
            issuer: "ripple-content".into(),
            expiration_hours: 1,
        });

        let token = other.issue(&test_user()).unwrap();
        assert!(jwt.verify(&token).is_none());
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let jwt = test_jwt();
        let other = Jwt::new(&JwtConfig {
            secret: "unit-test-secret".into(),
            issuer: "someone-else".into(),
            expiration_hours: 1,
        });

        let token = other.issue(&test_user()).unwrap();
        assert!(jwt.verify(&token).is_none());
    }
}
