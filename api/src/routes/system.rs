//! Root, health check and endpoint catalogue.
//!
//! None of these fail when the database is down.

use actix_web::{web, HttpResponse};
use hero_core::repositories::{DatabaseProbe, HeroRepository, UserRepository};
use hero_shared::{DatabaseStatus, HealthResponse, RootResponse, API_VERSION};

use crate::app::AppState;

/// Handler for GET /
pub async fn root<U, H, P>(state: web::Data<AppState<U, H, P>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    HttpResponse::Ok().json(RootResponse::new(&state.project_name))
}

/// Handler for GET /health
///
/// Always 200; the database state is reported in the body.
pub async fn health<U, H, P>(state: web::Data<AppState<U, H, P>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HeroRepository + 'static,
    P: DatabaseProbe + 'static,
{
    let database_status = match state.database.ping().await {
        Ok(()) => DatabaseStatus::Connected,
        Err(e) if e.is_database() => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            DatabaseStatus::Disconnected
        }
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            DatabaseStatus::Error
        }
    };

    HttpResponse::Ok().json(HealthResponse::new(database_status))
}

/// Handler for GET /docs
pub async fn docs() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "title": "Hero API",
        "version": API_VERSION,
        "authentication": "Bearer token from POST /auth/login in the Authorization header",
        "endpoints": {
            "system": {
                "root": {"path": "/", "method": "GET", "requires_auth": false},
                "health": {
                    "path": "/health",
                    "method": "GET",
                    "requires_auth": false,
                    "responses": {"200": "API status and database_status (connected, disconnected or error)"}
                },
                "docs": {"path": "/docs", "method": "GET", "requires_auth": false}
            },
            "auth": {
                "register": {
                    "path": "/auth/register",
                    "method": "POST",
                    "requires_auth": false,
                    "request_body": {
                        "email": "string (email)",
                        "username": "string (3-50 chars)",
                        "password": "string (min 8 chars)"
                    },
                    "responses": {
                        "201": "User created",
                        "400": "Email or username already registered",
                        "422": "Validation error"
                    }
                },
                "login": {
                    "path": "/auth/login",
                    "method": "POST",
                    "requires_auth": false,
                    "request_body": {"email": "string", "password": "string"},
                    "responses": {
                        "200": "access_token and token_type",
                        "401": "Incorrect email or password"
                    }
                },
                "me": {
                    "path": "/auth/me",
                    "method": "GET",
                    "requires_auth": true,
                    "responses": {"200": "Current user", "401": "Missing or invalid token", "404": "User not found"}
                }
            },
            "heroes": {
                "create": {
                    "path": "/heroes",
                    "method": "POST",
                    "requires_auth": true,
                    "request_body": {
                        "name": "string (1-100 chars)",
                        "secret_name": "string (1-100 chars)",
                        "age": "integer (0-10000, optional)"
                    },
                    "responses": {"201": "Hero created", "401": "Authentication required", "422": "Validation error"}
                },
                "list": {
                    "path": "/heroes",
                    "method": "GET",
                    "requires_auth": false,
                    "query": {"offset": "integer (default 0)", "limit": "integer (1-100, default 100)"},
                    "responses": {"200": "data, offset, limit and total"}
                },
                "get": {
                    "path": "/heroes/{hero_id}",
                    "method": "GET",
                    "requires_auth": false,
                    "responses": {"200": "Hero", "404": "Hero not found"}
                },
                "update": {
                    "path": "/heroes/{hero_id}",
                    "method": "PATCH",
                    "requires_auth": true,
                    "request_body": {"name": "optional", "secret_name": "optional", "age": "optional"},
                    "responses": {"200": "Updated hero", "403": "Not the owner", "404": "Hero not found"}
                },
                "delete": {
                    "path": "/heroes/{hero_id}",
                    "method": "DELETE",
                    "requires_auth": true,
                    "responses": {"200": "{\"ok\": true}", "403": "Not the owner", "404": "Hero not found"}
                }
            }
        },
        "errors": {
            "503": "Database service unavailable",
            "500": "Internal server error"
        }
    }))
}
