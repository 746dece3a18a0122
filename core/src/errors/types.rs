//! Specific error types for authentication, tokens and input validation.
//!
//! The HTTP layer decides status codes and response bodies; these types only
//! carry what went wrong.

use std::collections::HashMap;

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Username already taken")]
    UsernameAlreadyTaken,

    #[error("Not enough permissions")]
    InsufficientPermissions,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Not authenticated")]
    MissingToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid length: {field} (min: {min}, max: {max})")]
    InvalidLength { field: String, min: usize, max: usize },

    /// Several fields failed at once, keyed by field name
    #[error("Validation failed")]
    Fields { errors: HashMap<String, Vec<String>> },
}

impl ValidationError {
    /// Field-level messages, for response bodies
    pub fn field_errors(&self) -> HashMap<String, Vec<String>> {
        match self {
            Self::InvalidLength { field, .. } => {
                HashMap::from([(field.clone(), vec![self.to_string()])])
            }
            Self::Fields { errors } => errors.clone(),
        }
    }
}
