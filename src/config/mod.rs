//! Configuration management.
//!
//! # Design Decisions
//! - Config comes from the environment (`.env` honored in development);
//!   there is no config file or hot reload.
//! - Loaded once at startup into an immutable `AppConfig` that is passed
//!   explicitly to whatever needs it — no global state.
//! - A missing connection string is a startup-fatal error.

use thiserror::Error;

/// Default listening port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 4000;

/// Runtime configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string (`DATABASE_URL`). Required.
    pub database_url: String,

    /// Listening port (`PORT`). Defaults to 4000.
    pub port: u16,
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(
        database_url: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::from_vars(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));

        let err = AppConfig::from_vars(Some("   ".into()), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn port_defaults_to_4000() {
        let config =
            AppConfig::from_vars(Some("postgres://localhost/polygons".into()), None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_is_parsed() {
        let config = AppConfig::from_vars(
            Some("postgres://localhost/polygons".into()),
            Some("8080".into()),
        )
        .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn garbage_port_is_an_error() {
        let err = AppConfig::from_vars(
            Some("postgres://localhost/polygons".into()),
            Some("not-a-port".into()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
