//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository traits on PostgreSQL
//! using SQLx, the connection pool, and the embedded schema migrations.

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

pub use database::{map_sqlx_error, DatabasePool, PgHeroRepository, PgUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
