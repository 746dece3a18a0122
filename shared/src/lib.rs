//! Shared utilities and common types for the Hero API server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and the environment loader
//! - Error response bodies
//! - Pagination and health/response types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, CorsConfig, DatabaseConfig, JwtAlgorithm, JwtConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::{DatabaseStatus, HealthResponse, PaginatedResponse, Pagination, RootResponse, API_VERSION};
