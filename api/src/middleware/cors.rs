//! CORS middleware configuration for browser clients.
//!
//! Origins, credentials and preflight max age come from [`CorsConfig`]. A single `*`
//! entry in the origin list accepts any origin, and then credentials are not allowed.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use tg_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration
///
/// When CORS is disabled the returned middleware rejects every cross-origin request,
/// which leaves same-origin calls unaffected.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        tracing::info!("CORS disabled");
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    // Credentials are never granted to a wildcard origin list
    let credentials = config.allow_credentials && !config.allows_any_origin();
    if credentials {
        cors = cors.supports_credentials();
    } else if config.allow_credentials {
        tracing::warn!("Ignoring CORS credentials support because any origin is allowed");
    }

    tracing::info!(
        origins = ?config.allowed_origins,
        credentials,
        "CORS configured"
    );

    cors
}
