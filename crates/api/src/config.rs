//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CAFE_DATABASE_URL` - `SQLite` connection string (e.g. `sqlite://cafes.db`)
//! - `CAFE_API_KEY` - Shared secret required by the delete endpoint
//!
//! ## Optional
//! - `CAFE_HOST` - Bind address (default: 127.0.0.1)
//! - `CAFE_PORT` - Listen port (default: 3000)
//!
//! `DATABASE_URL` is honored as a fallback for `CAFE_DATABASE_URL`.

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use thiserror::Error;

const MIN_API_KEY_LENGTH: usize = 8;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shared secret authorizing the delete endpoint
    pub api_key: SecretString,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the api key fails the minimum-length check.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("CAFE_DATABASE_URL")?;
        let host = get_env_or_default("CAFE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CAFE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CAFE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CAFE_PORT".to_string(), e.to_string()))?;
        let api_key = get_required_secret("CAFE_API_KEY")?;
        validate_api_key(&api_key, "CAFE_API_KEY")?;

        Ok(Self {
            database_url,
            host,
            port,
            api_key,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Compare a client-provided key against the configured api key.
    ///
    /// Uses constant-time comparison so the check does not leak how much of
    /// the key matched. Keys of a different length never match.
    #[must_use]
    pub fn api_key_matches(&self, provided: &str) -> bool {
        provided
            .as_bytes()
            .ct_eq(self.api_key.expose_secret().as_bytes())
            .into()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    // Try primary key first (e.g., CAFE_DATABASE_URL)
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    // Fallback to generic DATABASE_URL
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the api key meets the minimum length requirement.
fn validate_api_key(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_API_KEY_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_API_KEY_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config(api_key: &str) -> ApiConfig {
        ApiConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            api_key: SecretString::from(api_key),
        }
    }

    #[test]
    fn test_validate_api_key_too_short() {
        let secret = SecretString::from("short");
        let result = validate_api_key(&secret, "TEST_KEY");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_api_key_valid_length() {
        let secret = SecretString::from("a".repeat(MIN_API_KEY_LENGTH));
        assert!(validate_api_key(&secret, "TEST_KEY").is_ok());
    }

    #[test]
    fn test_api_key_matches_exact() {
        let config = test_config("sekrit-api-key-42");
        assert!(config.api_key_matches("sekrit-api-key-42"));
    }

    #[test]
    fn test_api_key_matches_rejects_wrong_key() {
        let config = test_config("sekrit-api-key-42");
        assert!(!config.api_key_matches("sekrit-api-key-43"));
        assert!(!config.api_key_matches(""));
    }

    #[test]
    fn test_api_key_matches_rejects_prefix() {
        let config = test_config("sekrit-api-key-42");
        assert!(!config.api_key_matches("sekrit-api-key"));
        assert!(!config.api_key_matches("sekrit-api-key-42-and-more"));
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config("sekrit-api-key-42");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
