//! In-memory stand-in for the database connection

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::DomainError;

use super::DatabaseProbe;

/// Availability switch shared by the mock repositories.
///
/// Clones share the same flag, so one handle can take the whole mock
/// "database" down while repositories hold the others.
#[derive(Debug, Clone)]
pub struct MockDatabase {
    available: Arc<AtomicBool>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self {
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Fails the way a real pool does when the server is unreachable
    pub fn check(&self) -> Result<(), DomainError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(DomainError::database("connection refused"))
        }
    }
}

impl Default for MockDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseProbe for MockDatabase {
    async fn ping(&self) -> Result<(), DomainError> {
        self.check()
    }
}
