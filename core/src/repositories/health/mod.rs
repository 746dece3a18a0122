//! Database reachability probe used by the health check.

mod mock;

pub use mock::MockDatabase;

use async_trait::async_trait;

use crate::errors::DomainError;

/// Cheap round trip to the database
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Runs a trivial query (`SELECT 1`)
    ///
    /// # Returns
    /// * `Ok(())` - Database answered
    /// * `Err(DomainError::Database)` - Connection or driver failure
    /// * `Err(_)` - Any other failure
    async fn ping(&self) -> Result<(), DomainError>;
}
