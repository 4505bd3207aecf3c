//! Application state and route table
//!
//! [`configure`] registers every endpoint on an actix-web `ServiceConfig`, so the
//! binary and the integration tests build the same application around whichever
//! store, directory and clock they inject.

use actix_web::{web, HttpResponse};

use crate::handlers::json_error_handler;
use crate::routes::{auth, health, resources};

use tg_core::{Clock, RevocationStore, SessionService, SystemClock, UserRepository};
use tg_shared::{error_codes, ErrorResponse};

/// Shared state handed to every handler
pub struct AppState<U, S, C = SystemClock>
where
    U: UserRepository,
    S: RevocationStore,
    C: Clock,
{
    pub session_service: SessionService<U, S, C>,
}

impl<U, S, C> AppState<U, S, C>
where
    U: UserRepository,
    S: RevocationStore,
    C: Clock,
{
    pub fn new(session_service: SessionService<U, S, C>) -> Self {
        Self { session_service }
    }
}

/// Register all routes
///
/// `web::Data<AppState<U, S, C>>` must be added to the app separately.
pub fn configure<U, S, C>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check::<U, S, C>))
        .route("/test", web::get().to(resources::hello))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login::<U, S, C>))
                        .route("/verify", web::post().to(auth::verify::<U, S, C>))
                        .route("/refresh", web::post().to(auth::refresh::<U, S, C>))
                        .route("/logout", web::post().to(auth::logout::<U, S, C>))
                        .route("/me", web::post().to(auth::me::<U, S, C>)),
                )
                .route("/public", web::get().to(resources::public))
                .route("/protected", web::get().to(resources::protected::<U, S, C>))
                .route("/admin", web::get().to(resources::admin::<U, S, C>)),
        )
        .default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
