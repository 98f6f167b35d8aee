//! CORS middleware configuration for browser clients.
//!
//! The allowed origins default to the local front-end dev servers and can be
//! replaced through `ALLOWED_ORIGINS`.

use actix_cors::Cors;

use unify_shared::CorsConfig;

/// Creates a CORS middleware instance from the loaded configuration.
///
/// An origin of `*` allows any origin; everything else is matched exactly.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .expose_headers(vec!["x-request-id"])
        .max_age(config.max_age);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        log::warn!("CORS configured to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                log::debug!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
