//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management and health checks
//! - Repository implementations
//! - Embedded migrations
//! - Translation of driver errors into domain errors

pub mod connection;
pub mod errors;
pub mod postgres;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use errors::map_sqlx_error;
pub use postgres::{PgHeroRepository, PgUserRepository};
