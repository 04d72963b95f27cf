//! Configuration management.
//!
//! Loads configuration from environment variables with development
//! defaults. Production refuses to start with a missing or placeholder
//! JWT secret.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Token signing configuration
    pub jwt: JwtConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Token signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Token issuer claim
    pub issuer: String,
    /// Access token lifetime in hours
    pub expiration_hours: i64,
}

const DEV_JWT_SECRET: &str = "dev-secret-change-me";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("RIPPLE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("RIPPLE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://ripple.db".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            jwt: {
                let secret =
                    std::env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string());
                if app_env.eq_ignore_ascii_case("production")
                    && (secret.trim().is_empty() || secret == DEV_JWT_SECRET)
                {
                    return Err(
                        "JWT_SECRET must be set to a non-default value in production".to_string()
                    );
                }

                JwtConfig {
                    secret,
                    issuer: std::env::var("JWT_ISSUER")
                        .unwrap_or_else(|_| "ripple-content".to_string()),
                    expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(24),
                }
            },
        })
    }
}
