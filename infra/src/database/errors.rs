//! Classification of SQLx errors into domain errors.
//!
//! Anything that means "the database could not do its job" (I/O, TLS, pool
//! exhaustion, protocol trouble) becomes `DomainError::Database` so the HTTP
//! layer can answer 503 instead of 500.

use hero_core::errors::DomainError;

/// SQLSTATE for unique constraint violations
pub const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE for foreign key violations
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Converts a SQLx error raised while doing `context` into a domain error
pub fn map_sqlx_error(err: sqlx::Error, context: &str) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::not_found(context),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned());
            classify_database_error(code.as_deref(), db_err.message(), context)
        }
        other => {
            tracing::error!(error = %other, context, "Database operation failed");
            DomainError::database(format!("{}: {}", context, other))
        }
    }
}

/// Maps an error reported by the server itself using its SQLSTATE code
pub fn classify_database_error(code: Option<&str>, message: &str, context: &str) -> DomainError {
    match code {
        Some(UNIQUE_VIOLATION) => DomainError::Conflict {
            message: message.to_string(),
        },
        Some(FOREIGN_KEY_VIOLATION) => DomainError::Validation {
            message: message.to_string(),
        },
        _ => {
            tracing::error!(code = ?code, error = message, context, "Database returned an error");
            DomainError::database(format!("{}: {}", context, message))
        }
    }
}
