//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;
use crate::repositories::health::MockDatabase;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i32, User>>>,
    database: MockDatabase,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::with_database(MockDatabase::new())
    }

    /// Create a repository that fails whenever `database` is unavailable
    pub fn with_database(database: MockDatabase) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            database,
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Remove a user, simulating deletion outside the API
    pub async fn remove(&self, id: i32) -> Option<User> {
        self.users.write().await.remove(&id)
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        self.database.check()?;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.database.check()?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.database.check()?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        self.database.check()?;
        let mut users = self.users.write().await;

        // Mirror the unique constraints of the users table
        if users
            .values()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(DomainError::Conflict {
                message: "duplicate key value violates unique constraint".to_string(),
            });
        }

        let id = users.keys().max().copied().unwrap_or(0) + 1;
        let user = user.into_user(id);
        users.insert(id, user.clone());
        Ok(user)
    }
}
