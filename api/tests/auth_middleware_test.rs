//! Integration tests for the JWT middleware and the `AuthContext` extractor

mod common;

use actix_web::{http::header, http::StatusCode, test, web, App, HttpResponse};
use hero_api::middleware::{AuthContext, DbErrorGuard, JwtAuth};
use hero_core::services::TokenService;
use hero_shared::JwtConfig;
use std::sync::Arc;

use common::{bearer, TestContext, TEST_SECRET};

async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "user_id": auth.user_id,
        "email": auth.email,
        "is_admin": auth.is_admin,
    }))
}

#[actix_web::test]
async fn test_valid_token_populates_context() {
    let ctx = TestContext::new();
    let (user, token) = ctx.user_with_token("alice", true).await;

    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(Arc::clone(&ctx.token_service)))
            .wrap(DbErrorGuard)
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(bearer(&token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user_id"], user.id);
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["is_admin"], true);
}

#[actix_web::test]
async fn test_lowercase_scheme_is_accepted() {
    let ctx = TestContext::new();
    let (_, token) = ctx.user_with_token("bob", false).await;

    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(Arc::clone(&ctx.token_service)))
            .wrap(DbErrorGuard)
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((header::AUTHORIZATION, format!("bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_missing_or_malformed_header_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(Arc::clone(&ctx.token_service)))
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Not authenticated");

    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer"] {
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, value))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", value);
    }
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let ctx = TestContext::new();
    let (user, _) = ctx.user_with_token("mallory", false).await;

    let forger = TokenService::new(JwtConfig::new(format!("{}-forged", TEST_SECRET)));
    let forged = forger.issue_access_token(&user).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(Arc::clone(&ctx.token_service)))
            .wrap(DbErrorGuard)
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(bearer(&forged.access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Could not validate credentials");
}

#[actix_web::test]
async fn test_extractor_without_middleware_is_unauthorized() {
    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
