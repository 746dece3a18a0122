//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first; implementations translate storage failures into
//! `DomainError` so services never see driver types.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    /// Find a user by e-mail (exact match, callers normalise case)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with its assigned id
    /// * `Err(DomainError::Conflict)` - E-mail or username already taken
    /// * `Err(DomainError)` - Creation failed
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
