//! Mock implementation of HeroRepository for testing

use async_trait::async_trait;
use hero_shared::Pagination;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::hero::{Hero, HeroChanges, NewHero};
use crate::errors::DomainError;
use crate::repositories::health::MockDatabase;

use super::trait_::HeroRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Hero>,
    next_id: i32,
}

/// Mock hero repository for testing; ids are never reused, like a SERIAL column
pub struct MockHeroRepository {
    table: Arc<RwLock<Table>>,
    database: MockDatabase,
}

impl MockHeroRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::with_database(MockDatabase::new())
    }

    /// Create a repository that fails whenever `database` is unavailable
    pub fn with_database(database: MockDatabase) -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::default())),
            database,
        }
    }
}

impl Default for MockHeroRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HeroRepository for MockHeroRepository {
    async fn create(&self, hero: NewHero) -> Result<Hero, DomainError> {
        self.database.check()?;
        let mut table = self.table.write().await;
        table.next_id += 1;
        let hero = hero.into_hero(table.next_id);
        table.rows.insert(hero.id, hero.clone());
        Ok(hero)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Hero>, DomainError> {
        self.database.check()?;
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn list(&self, pagination: &Pagination) -> Result<Vec<Hero>, DomainError> {
        self.database.check()?;
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.database.check()?;
        let table = self.table.read().await;
        Ok(table.rows.len() as u64)
    }

    async fn update(&self, id: i32, changes: HeroChanges) -> Result<Option<Hero>, DomainError> {
        self.database.check()?;
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|hero| {
            hero.apply(changes);
            hero.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        self.database.check()?;
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
