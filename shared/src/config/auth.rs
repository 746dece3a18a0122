//! Authentication configuration

use config::Config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{get_or, ConfigError};

/// Secret shipped as a default for local development only
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";

/// Longest accepted access token lifetime: one year, in minutes
pub const MAX_EXPIRATION_MINUTES: i64 = 365 * 24 * 60;

/// HMAC algorithms accepted for signing access tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum JwtAlgorithm {
    HS256,
    HS384,
    HS512,
}

impl Default for JwtAlgorithm {
    fn default() -> Self {
        JwtAlgorithm::HS256
    }
}

impl fmt::Display for JwtAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtAlgorithm::HS256 => write!(f, "HS256"),
            JwtAlgorithm::HS384 => write!(f, "HS384"),
            JwtAlgorithm::HS512 => write!(f, "HS512"),
        }
    }
}

impl FromStr for JwtAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HS256" => Ok(JwtAlgorithm::HS256),
            "HS384" => Ok(JwtAlgorithm::HS384),
            "HS512" => Ok(JwtAlgorithm::HS512),
            other => Err(format!("unsupported JWT algorithm: {}", other)),
        }
    }
}

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default)]
    pub algorithm: JwtAlgorithm,

    /// Access token lifetime in minutes
    pub expiration_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
            algorithm: JwtAlgorithm::default(),
            expiration_minutes: 30,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_expiration_minutes(mut self, minutes: i64) -> Self {
        self.expiration_minutes = minutes;
        self
    }

    /// Set the signing algorithm
    pub fn with_algorithm(mut self, algorithm: JwtAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    pub(crate) fn from_settings(settings: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let algorithm = get_or(settings, "jwt_algorithm", defaults.algorithm.to_string())?
            .parse::<JwtAlgorithm>()
            .map_err(|e| ConfigError::invalid("jwt_algorithm", e))?;

        let expiration_minutes = get_or(settings, "jwt_expiration", defaults.expiration_minutes)?;
        if !(1..=MAX_EXPIRATION_MINUTES).contains(&expiration_minutes) {
            return Err(ConfigError::invalid(
                "jwt_expiration",
                format!("must be between 1 and {} minutes", MAX_EXPIRATION_MINUTES),
            ));
        }

        Ok(Self {
            secret: get_or(settings, "jwt_secret", defaults.secret)?,
            algorithm,
            expiration_minutes,
        })
    }
}
