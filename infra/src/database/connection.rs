//! Database connection pool management
//!
//! The pool is created lazily: no connection is opened until the first query,
//! so the service can start (and answer `/` and `/health`) while PostgreSQL
//! is still unreachable.

use async_trait::async_trait;
use hero_core::errors::DomainError;
use hero_core::repositories::DatabaseProbe;
use hero_shared::DatabaseConfig;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::errors::map_sqlx_error;
use crate::InfrastructureError;

/// Migrations embedded from `infra/migrations`
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Database connection pool wrapper
///
/// Manages the PostgreSQL connection pool with configurable settings
/// for connection limits, timeouts, and statement logging.
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx PostgreSQL connection pool
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new, lazily connecting, database pool
    ///
    /// Fails only when the URL cannot be parsed.
    pub fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            url = %config.redacted_url(),
            max_connections = config.max_connections,
            "Creating database connection pool"
        );

        let connect_options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            // Stale connections are common on managed databases
            .test_before_acquire(true)
            .connect_lazy_with(connect_options);

        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check if the database connection is healthy
    ///
    /// # Returns
    /// * `Ok(true)` - `SELECT 1` answered 1
    /// * `Ok(false)` - The query answered something else
    /// * `Err(InfrastructureError)` - The database could not be reached
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let value: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        if value == 1 {
            tracing::debug!("Database health check passed");
            Ok(true)
        } else {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            Ok(false)
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!(
            connections = self.pool.size(),
            idle_connections = self.pool.num_idle(),
            "Closing database connection pool"
        );
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }

    /// Apply pending migrations
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Running database migrations");
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Apply pending migrations without failing startup
    ///
    /// Returns whether the migrations were applied.
    pub async fn run_migrations_or_continue(&self) -> bool {
        match self.run_migrations().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Error running migrations");
                tracing::warn!(
                    "Database migrations failed but API will continue to function with limited capabilities"
                );
                false
            }
        }
    }
}

#[async_trait]
impl DatabaseProbe for DatabasePool {
    async fn ping(&self) -> Result<(), DomainError> {
        match self.health_check().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(DomainError::internal("unexpected health check result")),
            Err(InfrastructureError::Database(e)) => Err(map_sqlx_error(e, "health check")),
            Err(e) => Err(DomainError::internal(e.to_string())),
        }
    }
}
