//! Configuration management for todoboard.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `SEED_DEMO_TODOS` - Optional. Seed a handful of demo todos at startup. Defaults to `true`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Seed demo todos at startup
    pub seed_demo_todos: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `PORT` or `SEED_DEMO_TODOS`
    /// do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let seed_demo_todos = std::env::var("SEED_DEMO_TODOS")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("SEED_DEMO_TODOS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            host,
            port,
            seed_demo_todos,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            seed_demo_todos: false,
        }
    }
}
