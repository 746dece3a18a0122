//! Server configuration module

use config::Config;
use serde::{Deserialize, Serialize};

use super::{get_or, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port (Railway injects `PORT`)
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Address string suitable for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn from_settings(settings: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: get_or(settings, "host", defaults.host)?,
            port: get_or(settings, "port", defaults.port)?,
            workers: get_or(settings, "workers", defaults.workers)?,
        })
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from("*")],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Whether the wildcard origin is configured
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    pub(crate) fn from_settings(settings: &Config) -> Result<Self, ConfigError> {
        let raw: String = get_or(settings, "allowed_origins", String::from("*"))?;
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            allowed_origins: if allowed_origins.is_empty() {
                vec![String::from("*")]
            } else {
                allowed_origins
            },
            max_age: get_or(settings, "cors_max_age", default_max_age())?,
        })
    }
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("127.0.0.1", 8080);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_cors_default_allows_any_origin() {
        assert!(CorsConfig::default().allows_any_origin());

        let restricted = CorsConfig {
            allowed_origins: vec!["https://heroes.example.com".to_string()],
            ..Default::default()
        };
        assert!(!restricted.allows_any_origin());
    }
}
