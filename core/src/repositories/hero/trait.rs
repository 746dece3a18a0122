//! Hero repository trait defining the interface for hero persistence.

use async_trait::async_trait;
use hero_shared::Pagination;

use crate::domain::entities::hero::{Hero, HeroChanges, NewHero};
use crate::errors::DomainError;

/// Repository trait for Hero entity persistence operations
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Persist a new hero and return it with its assigned id
    async fn create(&self, hero: NewHero) -> Result<Hero, DomainError>;

    /// Find a hero by id
    ///
    /// # Returns
    /// * `Ok(Some(Hero))` - Hero found
    /// * `Ok(None)` - No hero with that id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i32) -> Result<Option<Hero>, DomainError>;

    /// One page of heroes ordered by id
    async fn list(&self, pagination: &Pagination) -> Result<Vec<Hero>, DomainError>;

    /// Total number of heroes
    async fn count(&self) -> Result<u64, DomainError>;

    /// Apply a partial update
    ///
    /// # Returns
    /// * `Ok(Some(Hero))` - The updated hero
    /// * `Ok(None)` - No hero with that id
    async fn update(&self, id: i32, changes: HeroChanges) -> Result<Option<Hero>, DomainError>;

    /// Delete a hero
    ///
    /// # Returns
    /// * `Ok(true)` - Hero was deleted
    /// * `Ok(false)` - Hero not found
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
