//! PostgreSQL implementation of the HeroRepository trait.

use async_trait::async_trait;
use hero_shared::Pagination;
use sqlx::{FromRow, PgPool};

use hero_core::domain::entities::hero::{Hero, HeroChanges, NewHero};
use hero_core::errors::DomainError;
use hero_core::repositories::HeroRepository;

use crate::database::errors::map_sqlx_error;

const HERO_COLUMNS: &str = "id, name, secret_name, age, owner_id";

#[derive(Debug, FromRow)]
struct HeroRow {
    id: i32,
    name: String,
    secret_name: String,
    age: Option<i32>,
    owner_id: Option<i32>,
}

impl From<HeroRow> for Hero {
    fn from(row: HeroRow) -> Self {
        Hero {
            id: row.id,
            name: row.name,
            secret_name: row.secret_name,
            age: row.age,
            owner_id: row.owner_id,
        }
    }
}

/// PostgreSQL implementation of HeroRepository
pub struct PgHeroRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgHeroRepository {
    /// Create a new PostgreSQL hero repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroRepository for PgHeroRepository {
    async fn create(&self, hero: NewHero) -> Result<Hero, DomainError> {
        let query = format!(
            "INSERT INTO heroes (name, secret_name, age, owner_id) \
             VALUES ($1, $2, $3, $4) RETURNING {HERO_COLUMNS}"
        );
        let row = sqlx::query_as::<_, HeroRow>(&query)
            .bind(&hero.name)
            .bind(&hero.secret_name)
            .bind(hero.age)
            .bind(hero.owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "create hero"))?;

        tracing::debug!(hero_id = row.id, "Inserted hero");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Hero>, DomainError> {
        let query = format!("SELECT {HERO_COLUMNS} FROM heroes WHERE id = $1");
        let row = sqlx::query_as::<_, HeroRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "find hero"))?;
        Ok(row.map(Hero::from))
    }

    async fn list(&self, pagination: &Pagination) -> Result<Vec<Hero>, DomainError> {
        let query = format!("SELECT {HERO_COLUMNS} FROM heroes ORDER BY id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, HeroRow>(&query)
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "list heroes"))?;
        Ok(rows.into_iter().map(Hero::from).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM heroes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "count heroes"))?;
        Ok(total.max(0) as u64)
    }

    async fn update(&self, id: i32, changes: HeroChanges) -> Result<Option<Hero>, DomainError> {
        let query = format!(
            "UPDATE heroes SET \
                 name = COALESCE($2, name), \
                 secret_name = COALESCE($3, secret_name), \
                 age = COALESCE($4, age) \
             WHERE id = $1 RETURNING {HERO_COLUMNS}"
        );
        let row = sqlx::query_as::<_, HeroRow>(&query)
            .bind(id)
            .bind(changes.name)
            .bind(changes.secret_name)
            .bind(changes.age)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "update hero"))?;
        Ok(row.map(Hero::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "delete hero"))?;
        Ok(result.rows_affected() > 0)
    }
}
