/**
 * Server Configuration
 *
 * This module loads the server configuration from the environment once at
 * startup. Required variables that are absent are a deployment error and
 * abort startup; nothing here is re-read per request. In particular the
 * token signing secret is read exactly once and injected into the
 * `TokenService` at construction.
 */

use thiserror::Error;

/// Default listen port when `SERVER_PORT` is unset
const DEFAULT_PORT: u16 = 3000;

/// Configuration error raised during startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Typed server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Token signing secret, injected into the token service
    pub jwt_secret: String,
    /// Base URL of the external blob store
    pub blob_store_url: String,
    /// Read-write token for the blob store
    pub blob_rw_token: String,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Load and validate the configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            blob_store_url: require("BLOB_STORE_URL")?,
            blob_rw_token: require("BLOB_RW_TOKEN")?,
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
