//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing configuration
//! - `database` - PostgreSQL connection and pool configuration
//! - `server` - HTTP bind address and CORS
//!
//! Everything is read from the process environment (after loading `.env`)
//! through the `config` crate. Every key has a default so a bare container
//! boots with a development setup.

pub mod auth;
pub mod database;
pub mod server;

use std::collections::HashMap;

use config::{Config, Environment};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{JwtAlgorithm, JwtConfig};
pub use database::DatabaseConfig;
pub use server::{CorsConfig, ServerConfig};

/// Default application title
pub const DEFAULT_PROJECT_NAME: &str = "Hero API";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_uppercase(),
            message: message.into(),
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Application title shown by the root endpoint
    pub project_name: String,

    /// Enables debug-level logging
    pub debug: bool,

    /// Whether to apply pending migrations at startup
    pub run_migrations: bool,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub auth: JwtConfig,

    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            debug: true,
            run_migrations: true,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: JwtConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load(None)
    }

    /// Load configuration from an explicit set of variables
    ///
    /// Keys use the same names as the environment (`DATABASE_URL`, `PORT`, ...).
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(Some(vars))
    }

    fn load(source: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("project_name", defaults.project_name.as_str())?
            .set_default("debug", defaults.debug)?
            .set_default("run_migrations", defaults.run_migrations)?
            .add_source(
                // Values stay strings; typed keys are converted on `get`
                Environment::default()
                    .ignore_empty(true)
                    .source(source),
            )
            .build()?;

        Ok(Self {
            project_name: settings.get_string("project_name")?,
            debug: settings.get_bool("debug")?,
            run_migrations: settings.get_bool("run_migrations")?,
            server: ServerConfig::from_settings(&settings)?,
            database: DatabaseConfig::from_settings(&settings)?,
            auth: JwtConfig::from_settings(&settings)?,
            cors: CorsConfig::from_settings(&settings)?,
        })
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Read an optional key, falling back to `default` when it is absent
pub(crate) fn get_or<T: DeserializeOwned>(
    settings: &Config,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match settings.get::<T>(key) {
        Ok(value) => Ok(value),
        Err(config::ConfigError::NotFound(_)) => Ok(default),
        Err(e) => Err(ConfigError::invalid(key, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_vars(HashMap::new()).unwrap();
        assert_eq!(config.project_name, "Hero API");
        assert!(config.debug);
        assert!(config.run_migrations);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.auth.expiration_minutes, 30);
        assert_eq!(config.auth.algorithm, JwtAlgorithm::HS256);
        assert!(config.cors.allows_any_origin());
    }

    #[test]
    fn test_values_are_read_from_variables() {
        let config = AppConfig::from_vars(vars(&[
            ("PROJECT_NAME", "Heroes"),
            ("DEBUG", "false"),
            ("PORT", "9090"),
            ("JWT_SECRET", "s3cr3t"),
            ("JWT_ALGORITHM", "HS512"),
            ("JWT_EXPIRATION", "5"),
            ("DATABASE_URL", "postgresql+asyncpg://u:p@db:5432/heroes"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();

        assert_eq!(config.project_name, "Heroes");
        assert!(!config.debug);
        assert!(!config.run_migrations);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.auth.secret, "s3cr3t");
        assert_eq!(config.auth.algorithm, JwtAlgorithm::HS512);
        assert_eq!(config.auth.expiration_minutes, 5);
        assert_eq!(config.database.url, "postgresql://u:p@db:5432/heroes");
        assert_eq!(config.default_log_filter(), "info");
    }

    #[test]
    fn test_numeric_looking_strings_are_kept_verbatim() {
        let config = AppConfig::from_vars(vars(&[
            ("JWT_SECRET", "000123456789012345678901234567890"),
            ("PROJECT_NAME", "true"),
        ]))
        .unwrap();

        assert_eq!(config.auth.secret, "000123456789012345678901234567890");
        assert_eq!(config.project_name, "true");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = AppConfig::from_vars(vars(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_expiration_bounds() {
        for value in ["0", "-5", "525601", "1000000000000"] {
            let result = AppConfig::from_vars(vars(&[("JWT_EXPIRATION", value)]));
            assert!(matches!(result, Err(ConfigError::Invalid { .. })), "{}", value);
        }

        let config = AppConfig::from_vars(vars(&[("JWT_EXPIRATION", "525600")])).unwrap();
        assert_eq!(config.auth.expiration_minutes, auth::MAX_EXPIRATION_MINUTES);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let result = AppConfig::from_vars(vars(&[("JWT_ALGORITHM", "RS256")]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
