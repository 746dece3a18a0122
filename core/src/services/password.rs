//! bcrypt password hashing.
//!
//! Hashing is CPU bound, so both operations run on the blocking pool.

use crate::errors::DomainError;

/// Hashes and verifies passwords with bcrypt
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    /// Returns `false` for a wrong password and for a malformed stored hash
    pub async fn verify(&self, password: &str, hashed: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
            .await
            .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?;

        match verified {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
