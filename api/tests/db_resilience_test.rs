//! Integration tests for behaviour while the database is unreachable

mod common;

use actix_web::{
    body::MessageBody, dev::ServiceResponse, http::StatusCode, test, web, App, HttpResponse,
};
use hero_api::handlers::error::{ApiError, ApiResult};
use hero_api::{create_app, middleware::DbErrorGuard};
use hero_core::errors::DomainError;
use hero_shared::CorsConfig;
use serde_json::json;

use common::{bearer, TestContext};

async fn assert_database_unavailable<B: MessageBody>(resp: ServiceResponse<B>) {
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Database service unavailable");
    assert_eq!(body["type"], "database_error");
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_data_routes_return_503() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let (_, token) = ctx.user_with_token("owner", false).await;
    ctx.database.set_available(false);

    let req = test::TestRequest::get().uri("/heroes").to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get().uri("/heroes/1").to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;

    let req = test::TestRequest::post()
        .uri("/heroes")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Deadpond", "secret_name": "Dive Wilson"}))
        .to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;
}

#[actix_web::test]
async fn test_auth_routes_return_503() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let (_, token) = ctx.user_with_token("owner", false).await;
    ctx.database.set_available(false);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"email": "new@example.com", "username": "newbie", "password": "correct-horse"}))
        .to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "owner@example.com", "password": "correct-horse"}))
        .to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;
}

#[actix_web::test]
async fn test_system_routes_survive() {
    let ctx = TestContext::new();
    ctx.database.set_available(false);
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;

    for uri in ["/", "/docs", "/health"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
    }
}

#[actix_web::test]
async fn test_recovers_when_database_returns() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;

    ctx.database.set_available(false);
    let req = test::TestRequest::get().uri("/heroes").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SERVICE_UNAVAILABLE);

    ctx.database.set_available(true);
    let req = test::TestRequest::get().uri("/heroes").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_hero_routes_work_again_after_outage() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let (_, token) = ctx.user_with_token("owner", false).await;

    let req = test::TestRequest::post()
        .uri("/heroes")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Deadpond", "secret_name": "Dive Wilson"}))
        .to_request();
    let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/heroes/{}", created["id"]);

    ctx.database.set_available(false);
    let req = test::TestRequest::get().uri(&uri).to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({"age": 30}))
        .to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;

    ctx.database.set_available(true);
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, created);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({"age": 30}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["age"], 30);
}

#[actix_web::test]
async fn test_token_rejection_passes_through_guard() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    ctx.database.set_available(false);

    let req = test::TestRequest::delete().uri("/heroes/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

async fn failing_health() -> ApiResult<HttpResponse> {
    Err(DomainError::database("connection reset by peer").into())
}

async fn failing_handler() -> ApiResult<HttpResponse> {
    Err(ApiError::from(DomainError::database("connection reset by peer")))
}

async fn plain_failure() -> Result<HttpResponse, actix_web::Error> {
    Err(actix_web::error::ErrorInternalServerError("stack trace with secrets"))
}

#[actix_web::test]
async fn test_health_route_database_failure_is_partial_200() {
    let app = test::init_service(
        App::new()
            .wrap(DbErrorGuard)
            .route("/health", web::get().to(failing_health))
            .route("/other", web::get().to(failing_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["api_status"], "ok");
    assert_eq!(body["database_status"], "error");
    assert_eq!(body["error"], "Database connection failed");

    let req = test::TestRequest::get().uri("/other").to_request();
    assert_database_unavailable(test::call_service(&app, req).await).await;
}

#[actix_web::test]
async fn test_unexpected_500_is_sanitised() {
    let app = test::init_service(
        App::new()
            .wrap(DbErrorGuard)
            .route("/boom", web::get().to(plain_failure)),
    )
    .await;

    let req = test::TestRequest::get().uri("/boom").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Internal server error");
    assert!(!body.to_string().contains("secrets"));
}
