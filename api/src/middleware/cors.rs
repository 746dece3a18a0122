//! CORS middleware configuration for cross-origin requests.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use hero_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// `*` in `ALLOWED_ORIGINS` allows any origin, method and header; otherwise
/// only the listed origins are accepted. Credentials are supported either way.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.allows_any_origin() {
        tracing::debug!("Configuring permissive CORS");
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(config.max_age)
            .supports_credentials();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age)
        .supports_credentials();

    for origin in &config.allowed_origins {
        tracing::debug!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
