//! Shared error response structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error body used across all API endpoints
///
/// `detail` is always present; database and internal failures add a
/// human-readable `message` and, for the database case, a `type` marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short description of what went wrong
    pub detail: String,

    /// Longer explanation for end users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Error category marker (e.g. `database_error`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Field-specific validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            message: None,
            error_type: None,
            errors: None,
        }
    }

    /// Attach an end-user message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach an error category marker
    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    /// Attach field-level validation errors
    pub fn with_errors(mut self, errors: HashMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Body returned when the database cannot serve the request
    pub fn database_unavailable() -> Self {
        Self::new("Database service unavailable")
            .with_message("The database service is temporarily unavailable. Please try again later.")
            .with_type(error_codes::DATABASE_ERROR)
    }

    /// Body returned for unexpected failures
    pub fn internal() -> Self {
        Self::new("Internal server error")
            .with_message("An internal server error occurred. Our team has been notified.")
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const DATABASE_ERROR: &str = "database_error";
}
