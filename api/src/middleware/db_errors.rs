//! Database-resilience middleware.
//!
//! Inspects every response for errors raised by handlers. Database failures
//! are logged and turned into a 503 body, except on `/health`, which keeps
//! answering 200 with a degraded status. Unexpected 500s that did not come
//! from `ApiError` get the standard internal error body.

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use hero_shared::{ErrorResponse, HealthResponse};
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use crate::handlers::error::ApiError;

/// Routes that must keep answering while the database is down
const SAFE_PATHS: &[&str] = &[
    "/",
    "/health",
    "/docs",
    "/auth/register",
    "/auth/login",
    "/auth/me",
];

const HEALTH_PATH: &str = "/health";

pub fn is_safe_path(path: &str) -> bool {
    SAFE_PATHS.contains(&path) || path.starts_with("/static/")
}

/// Middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct DbErrorGuard;

impl<S, B> Transform<S, ServiceRequest> for DbErrorGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = DbErrorGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(DbErrorGuardMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct DbErrorGuardMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for DbErrorGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        // The request must stay uniquely owned until routing has run
        let path = req.path().to_owned();

        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(guard_response(res.map_into_boxed_body(), &path))
        })
    }
}

enum Outcome {
    PassThrough,
    Database(String),
    Unexpected(String),
}

fn classify(res: &ServiceResponse<BoxBody>) -> Outcome {
    let status = res.status();
    match res.response().error() {
        Some(err) => match err.as_error::<ApiError>() {
            Some(api_err) if api_err.is_database() => Outcome::Database(api_err.to_string()),
            Some(_) => Outcome::PassThrough,
            None if status == StatusCode::INTERNAL_SERVER_ERROR => {
                Outcome::Unexpected(err.to_string())
            }
            None => Outcome::PassThrough,
        },
        None if status == StatusCode::INTERNAL_SERVER_ERROR => {
            Outcome::Unexpected(String::from("handler returned 500 without an error"))
        }
        None => Outcome::PassThrough,
    }
}

fn guard_response(res: ServiceResponse<BoxBody>, path: &str) -> ServiceResponse<BoxBody> {
    match classify(&res) {
        Outcome::PassThrough => res,
        Outcome::Database(error) => {
            tracing::error!(path, error = %error, "Database error while handling request");
            if is_safe_path(path) {
                tracing::warn!(path, "Database error affected a critical route");
            }

            let response = if path == HEALTH_PATH {
                HttpResponse::Ok().json(HealthResponse::database_failure())
            } else {
                HttpResponse::ServiceUnavailable().json(ErrorResponse::database_unavailable())
            };
            res.into_response(response)
        }
        Outcome::Unexpected(error) => {
            tracing::error!(path, error = %error, "Unhandled error while handling request");
            res.into_response(
                HttpResponse::InternalServerError().json(ErrorResponse::internal()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_paths() {
        for path in ["/", "/health", "/docs", "/auth/register", "/auth/login", "/auth/me"] {
            assert!(is_safe_path(path), "{path}");
        }
        assert!(is_safe_path("/static/logo.png"));
        assert!(!is_safe_path("/heroes"));
        assert!(!is_safe_path("/heroes/1"));
        assert!(!is_safe_path("/healthz"));
    }
}
