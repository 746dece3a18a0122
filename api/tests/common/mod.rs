//! Shared fixtures for API integration tests

#![allow(dead_code)]

use actix_web::web;
use hero_api::AppState;
use hero_core::domain::entities::user::{NewUser, User};
use hero_core::repositories::{MockDatabase, MockHeroRepository, MockUserRepository, UserRepository};
use hero_core::services::{AuthService, HeroService, PasswordHasher, TokenService};
use hero_shared::JwtConfig;
use std::sync::Arc;

pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestState = AppState<MockUserRepository, MockHeroRepository, MockDatabase>;

/// Application state over in-memory repositories sharing one `MockDatabase`
pub struct TestContext {
    pub database: MockDatabase,
    pub users: Arc<MockUserRepository>,
    pub heroes: Arc<MockHeroRepository>,
    pub token_service: Arc<TokenService>,
    pub state: web::Data<TestState>,
}

impl TestContext {
    pub fn new() -> Self {
        let database = MockDatabase::new();
        let users = Arc::new(MockUserRepository::with_database(database.clone()));
        let heroes = Arc::new(MockHeroRepository::with_database(database.clone()));
        let token_service = Arc::new(TokenService::new(JwtConfig::new(TEST_SECRET)));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&token_service),
            PasswordHasher::new(4),
        ));
        let hero_service = Arc::new(HeroService::new(Arc::clone(&heroes)));

        let state = web::Data::new(AppState::new(
            "Hero API",
            auth_service,
            hero_service,
            Arc::new(database.clone()),
        ));

        Self {
            database,
            users,
            heroes,
            token_service,
            state,
        }
    }

    /// Stores a user directly and returns it with a valid bearer token
    pub async fn user_with_token(&self, username: &str, is_admin: bool) -> (User, String) {
        let mut new_user = NewUser::new(format!("{}@example.com", username), username, "unused-hash");
        new_user.is_admin = is_admin;
        let user = self.users.create(new_user).await.unwrap();
        let token = self.token_service.issue_access_token(&user).unwrap();
        (user, token.access_token)
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
