use hero_core::domain::entities::hero::{Hero, HeroChanges, HeroDraft};
use hero_shared::types::pagination::DEFAULT_LIMIT;
use hero_shared::Pagination;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HeroCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub secret_name: String,

    #[validate(range(min = 0, max = 10000))]
    pub age: Option<i32>,
}

impl From<HeroCreate> for HeroDraft {
    fn from(req: HeroCreate) -> Self {
        HeroDraft {
            name: req.name,
            secret_name: req.secret_name,
            age: req.age,
        }
    }
}

/// Partial update; absent fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct HeroUpdate {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub secret_name: Option<String>,

    #[validate(range(min = 0, max = 10000))]
    pub age: Option<i32>,
}

impl From<HeroUpdate> for HeroChanges {
    fn from(req: HeroUpdate) -> Self {
        HeroChanges {
            name: req.name,
            secret_name: req.secret_name,
            age: req.age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroResponse {
    pub id: i32,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub owner_id: Option<i32>,
}

impl From<Hero> for HeroResponse {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            secret_name: hero.secret_name,
            age: hero.age,
            owner_id: hero.owner_id,
        }
    }
}

/// `?offset=&limit=` on the list endpoint
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct HeroListQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl From<HeroListQuery> for Pagination {
    fn from(query: HeroListQuery) -> Self {
        Pagination::new(
            query.offset.unwrap_or(0),
            query.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
