//! CORS middleware configuration for cross-origin requests.
//!
//! Browser clients call the API from their own origin. Outside production any
//! origin is accepted; in production only the origins listed in
//! `ALLOWED_ORIGINS` are.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use sb_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the loaded configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age);

    if config.allow_any_origin {
        tracing::debug!("Configuring permissive CORS");
        return cors.allow_any_origin();
    }

    config.allowed_origins.iter().fold(cors, |cors, origin| {
        tracing::info!("Adding allowed origin: {}", origin);
        cors.allowed_origin(origin)
    })
}
