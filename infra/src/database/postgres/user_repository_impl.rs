//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use hero_core::domain::entities::user::{NewUser, User};
use hero_core::errors::DomainError;
use hero_core::repositories::UserRepository;

use crate::database::errors::map_sqlx_error;

const USER_COLUMNS: &str = "id, email, username, hashed_password, is_admin";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    email: String,
    username: String,
    hashed_password: String,
    is_admin: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            username: row.username,
            hashed_password: row.hashed_password,
            is_admin: row.is_admin,
        }
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "find user"))?;
        Ok(row.map(User::from))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "find user"))?;
        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_one("username", username).await
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = format!(
            "INSERT INTO users (email, username, hashed_password, is_admin) \
             VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.hashed_password)
            .bind(user.is_admin)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "create user"))?;

        tracing::debug!(user_id = row.id, "Inserted user");
        Ok(row.into())
    }
}
