//! CRUD rules for heroes: ownership, partial updates and paging.

use std::sync::Arc;

use hero_shared::{PaginatedResponse, Pagination};

use crate::domain::entities::hero::{Hero, HeroChanges, HeroDraft, NewHero};
use crate::domain::entities::user::Actor;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::HeroRepository;

const RESOURCE: &str = "Hero";

pub struct HeroService<H>
where
    H: HeroRepository,
{
    hero_repository: Arc<H>,
}

impl<H> HeroService<H>
where
    H: HeroRepository,
{
    pub fn new(hero_repository: Arc<H>) -> Self {
        Self { hero_repository }
    }

    /// Create a hero owned by `actor`
    pub async fn create(&self, actor: &Actor, draft: HeroDraft) -> DomainResult<Hero> {
        let hero = self
            .hero_repository
            .create(NewHero::from_draft(draft, actor.user_id))
            .await?;
        tracing::info!(hero_id = hero.id, owner_id = actor.user_id, "Hero created");
        Ok(hero)
    }

    /// One page of heroes; `limit` is clamped before querying
    pub async fn list(&self, pagination: Pagination) -> DomainResult<PaginatedResponse<Hero>> {
        let pagination = pagination.validate();
        let heroes = self.hero_repository.list(&pagination).await?;
        let total = self.hero_repository.count().await?;
        Ok(PaginatedResponse::new(heroes, pagination, total))
    }

    pub async fn get(&self, id: i32) -> DomainResult<Hero> {
        self.hero_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    /// Apply `changes` if `actor` owns the hero or is an admin
    pub async fn update(&self, actor: &Actor, id: i32, changes: HeroChanges) -> DomainResult<Hero> {
        let hero = self.get_managed(actor, id).await?;
        if changes.is_empty() {
            return Ok(hero);
        }

        let hero = self
            .hero_repository
            .update(id, changes)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))?;
        tracing::info!(hero_id = id, user_id = actor.user_id, "Hero updated");
        Ok(hero)
    }

    /// Delete the hero if `actor` owns it or is an admin
    pub async fn delete(&self, actor: &Actor, id: i32) -> DomainResult<()> {
        self.get_managed(actor, id).await?;
        if !self.hero_repository.delete(id).await? {
            return Err(DomainError::not_found(RESOURCE));
        }
        tracing::info!(hero_id = id, user_id = actor.user_id, "Hero deleted");
        Ok(())
    }

    async fn get_managed(&self, actor: &Actor, id: i32) -> DomainResult<Hero> {
        let hero = self.get(id).await?;
        if !hero.can_be_managed_by(actor) {
            tracing::warn!(hero_id = id, user_id = actor.user_id, "Hero modification denied");
            return Err(AuthError::InsufficientPermissions.into());
        }
        Ok(hero)
    }
}
