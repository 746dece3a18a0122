use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use hero_api::{create_app, logging, AppState};
use hero_core::services::{AuthService, HeroService, PasswordHasher, TokenService};
use hero_infra::{DatabasePool, PgHeroRepository, PgUserRepository};
use hero_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env and configuration
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    logging::init(config.default_log_filter());

    tracing::info!(project = %config.project_name, "Starting server");
    if config.auth.is_using_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development default secret");
    }

    // The pool connects lazily, so a missing database does not stop startup
    let pool = DatabasePool::new(config.database.clone()).context("Failed to create database pool")?;

    if config.run_migrations {
        pool.run_migrations_or_continue().await;
    } else {
        tracing::info!("Skipping database migrations (RUN_MIGRATIONS=false)");
    }

    // Wire repositories and services
    let user_repository = Arc::new(PgUserRepository::new(pool.get_pool().clone()));
    let hero_repository = Arc::new(PgHeroRepository::new(pool.get_pool().clone()));
    let token_service = Arc::new(TokenService::new(config.auth.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service,
        PasswordHasher::default(),
    ));
    let hero_service = Arc::new(HeroService::new(hero_repository));

    let app_state = web::Data::new(AppState::new(
        config.project_name.clone(),
        auth_service,
        hero_service,
        Arc::new(pool.clone()),
    ));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server error")?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
