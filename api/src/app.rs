//! Application state and factory
//!
//! This module holds the shared application state and builds the Actix-web
//! application with routes, middleware and extractor error handlers.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpRequest, HttpResponse,
};
use hero_core::errors::DomainError;
use hero_core::repositories::{DatabaseProbe, HeroRepository, UserRepository};
use hero_core::services::{AuthService, HeroService, TokenService};
use hero_shared::{CorsConfig, ErrorResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::handlers::error::ApiError;
use crate::middleware::{create_cors, DbErrorGuard, JwtAuth};
use crate::routes::{auth, heroes, system};

/// Application state that holds shared services
pub struct AppState<U, H, P>
where
    U: UserRepository,
    H: HeroRepository,
    P: DatabaseProbe,
{
    /// Title used in the welcome message
    pub project_name: String,
    pub auth_service: Arc<AuthService<U>>,
    pub hero_service: Arc<HeroService<H>>,
    pub token_service: Arc<TokenService>,
    /// Used by the health check
    pub database: Arc<P>,
}

impl<U, H, P> AppState<U, H, P>
where
    U: UserRepository,
    H: HeroRepository,
    P: DatabaseProbe,
{
    pub fn new(
        project_name: impl Into<String>,
        auth_service: Arc<AuthService<U>>,
        hero_service: Arc<HeroService<H>>,
        database: Arc<P>,
    ) -> Self {
        let token_service = Arc::clone(auth_service.token_service());
        Self {
            project_name: project_name.into(),
            auth_service,
            hero_service,
            token_service,
            database,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, H, P>(
    app_state: web::Data<AppState<U, H, P>>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let jwt = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        // Middleware order matters: the last one wraps everything
        .wrap(DbErrorGuard)
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        // System endpoints
        .route("/", web::get().to(system::root::<U, H, P>))
        .route("/health", web::get().to(system::health::<U, H, P>))
        .route("/docs", web::get().to(system::docs))
        // Auth routes
        .service(
            web::scope("/auth")
                .service(
                    web::resource("/register").route(web::post().to(auth::register::<U, H, P>)),
                )
                .service(web::resource("/login").route(web::post().to(auth::login::<U, H, P>)))
                .service(
                    web::resource("/me")
                        .route(web::get().to(auth::me::<U, H, P>).wrap(jwt.clone())),
                ),
        )
        // Hero routes; one resource per path so other methods get 405
        .service(
            web::scope("/heroes")
                .service(
                    web::resource(["", "/"])
                        .route(web::get().to(heroes::list_heroes::<U, H, P>))
                        .route(
                            web::post()
                                .to(heroes::create_hero::<U, H, P>)
                                .wrap(jwt.clone()),
                        ),
                )
                .service(
                    web::resource("/{hero_id}")
                        .route(web::get().to(heroes::get_hero::<U, H, P>))
                        .route(
                            web::patch()
                                .to(heroes::update_hero::<U, H, P>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            web::delete()
                                .to(heroes::delete_hero::<U, H, P>)
                                .wrap(jwt),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Malformed bodies are validation failures, not server errors
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        invalid_request(format!("Invalid request body: {}", err))
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        invalid_request(format!("Invalid path parameter: {}", err))
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        invalid_request(format!("Invalid query parameter: {}", err))
    })
}

fn invalid_request(message: String) -> Error {
    ApiError::from(DomainError::Validation { message }).into()
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not Found"))
}
