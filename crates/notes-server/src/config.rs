//! Server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Where notes are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// PostgreSQL via `DATABASE_URL`.
    #[default]
    Postgres,
    /// Process memory; contents are lost on exit.
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue {
                name: "STORAGE_BACKEND".to_string(),
                reason: format!("unknown backend '{}'", other),
            }),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Storage backend for notes.
    pub storage: StorageBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            storage: StorageBackend::Postgres,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 5000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `STORAGE_BACKEND`: "postgres" or "memory" (default: "postgres")
    ///
    /// Database settings are read separately by `StoreConfig::from_env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(s) => s.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("'{}' is not a valid port", s),
            })?,
            Err(_) => defaults.port,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or(defaults.cors_allowed_origins);

        let storage = match env::var("STORAGE_BACKEND") {
            Ok(s) => s.parse()?,
            Err(_) => defaults.storage,
        };

        Ok(Self {
            port,
            log_level,
            cors_allowed_origins,
            storage,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // SAFETY: This is the only test in the crate that touches these variables.
        unsafe {
            env::remove_var("PORT");
            env::remove_var("LOG_LEVEL");
            env::remove_var("CORS_ALLOWED_ORIGINS");
            env::remove_var("STORAGE_BACKEND");
        }

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.storage, StorageBackend::Postgres);
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!("Postgres".parse::<StorageBackend>().unwrap(), StorageBackend::Postgres);
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let config = ServerConfig {
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }
}
