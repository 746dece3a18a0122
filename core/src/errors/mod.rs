//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Driver, pool or connection failure
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True when the failure comes from the database being unreachable or broken
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(DomainError::not_found("Hero").to_string(), "Hero not found");
    }

    #[test]
    fn test_bridged_errors_keep_their_message() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Incorrect email or password");

        let err: DomainError = TokenError::TokenExpired.into();
        assert_eq!(err.to_string(), "Token has expired");
    }

    #[test]
    fn test_is_database() {
        assert!(DomainError::database("connection refused").is_database());
        assert!(!DomainError::internal("boom").is_database());
        assert!(!DomainError::not_found("User").is_database());
    }

    #[test]
    fn test_field_errors() {
        let err = ValidationError::InvalidLength {
            field: "username".to_string(),
            min: 3,
            max: 50,
        };
        let fields = err.field_errors();
        assert_eq!(
            fields["username"],
            vec!["Invalid length: username (min: 3, max: 50)".to_string()]
        );
    }
}
