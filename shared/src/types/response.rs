//! API response bodies for the system endpoints

use serde::{Deserialize, Serialize};

/// Version reported by the root and health endpoints
pub const API_VERSION: &str = "1.0.0";

/// Database connectivity as seen by the health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    /// `SELECT 1` succeeded
    Connected,
    /// The database driver reported a failure
    Disconnected,
    /// Any other failure while probing
    Error,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// API status, `ok` whenever the process answers
    pub api_status: String,

    /// Database connectivity
    pub database_status: DatabaseStatus,

    /// Failure summary when the request itself hit a database error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Server version
    pub version: String,
}

impl HealthResponse {
    pub fn new(database_status: DatabaseStatus) -> Self {
        Self {
            api_status: String::from("ok"),
            database_status,
            error: None,
            version: API_VERSION.to_string(),
        }
    }

    /// Partial health body served when the health route itself fails on the database
    pub fn database_failure() -> Self {
        Self {
            error: Some(String::from("Database connection failed")),
            ..Self::new(DatabaseStatus::Error)
        }
    }
}

/// Welcome body served by `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub docs: String,
    pub health: String,
    pub version: String,
}

impl RootResponse {
    pub fn new(project_name: &str) -> Self {
        Self {
            message: format!("Welcome to the {}!", project_name),
            docs: String::from("/docs"),
            health: String::from("/health"),
            version: API_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_serialization() {
        let body = serde_json::to_value(HealthResponse::new(DatabaseStatus::Disconnected)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "api_status": "ok",
                "database_status": "disconnected",
                "version": "1.0.0"
            })
        );
    }

    #[test]
    fn test_database_failure_body() {
        let body = serde_json::to_value(HealthResponse::database_failure()).unwrap();
        assert_eq!(body["database_status"], "error");
        assert_eq!(body["error"], "Database connection failed");
    }
}
