//! Mapping of domain errors onto HTTP responses.

use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use hero_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use hero_shared::ErrorResponse;
use std::collections::HashMap;

/// Error type returned by every handler
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Errors the resilience middleware treats as "database down"
    pub fn is_database(&self) -> bool {
        self.0.is_database()
    }

    /// Body and status for a validation failure with field details
    pub fn validation(errors: HashMap<String, Vec<String>>) -> Self {
        Self(DomainError::ValidationErr(ValidationError::Fields { errors }))
    }

    fn body(&self) -> ErrorResponse {
        match &self.0 {
            DomainError::Validation { message } => ErrorResponse::new(message.clone()),
            DomainError::ValidationErr(err) => {
                ErrorResponse::new(err.to_string()).with_errors(err.field_errors())
            }
            DomainError::NotFound { resource } => ErrorResponse::new(format!("{} not found", resource)),
            DomainError::Conflict { .. } => ErrorResponse::new("Resource already exists"),
            DomainError::Database { .. } => ErrorResponse::database_unavailable(),
            DomainError::Internal { .. } | DomainError::Token(TokenError::TokenGenerationFailed) => {
                ErrorResponse::internal()
            }
            DomainError::Auth(err) => ErrorResponse::new(err.to_string()),
            DomainError::Token(err) => ErrorResponse::new(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self(err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        Self::validation(fields)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict { .. } => StatusCode::BAD_REQUEST,
            DomainError::Database { .. } => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::EmailAlreadyRegistered | AuthError::UsernameAlreadyTaken => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
            },
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "Request rejected");
        }

        let mut builder = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(self.body())
    }
}
