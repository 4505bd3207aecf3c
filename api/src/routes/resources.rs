//! Demonstration endpoints for the three access levels

use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::MessageResponse;
use crate::handlers::ApiError;
use crate::middleware::BearerToken;

use tg_core::{Clock, RevocationStore, UserRepository};

/// Role required by [`admin`]
pub const ADMIN_ROLE: &str = "admin";

/// Handler for GET /test
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello World! Server is running."))
}

/// Handler for GET /api/public
///
/// No authentication required.
pub async fn public() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(
        "This is public data, no auth required",
    ))
}

/// Handler for GET /api/protected
///
/// Requires a usable access token in `Authorization: Bearer`. Responds with the
/// caller's principal.
///
/// ## Errors
/// - 401 Unauthorized: Header missing, or the token is invalid, expired or revoked
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn protected<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    token: BearerToken,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    let principal = state.session_service.authorize(token.as_str(), None).await?;
    tracing::debug!(subject = %principal.id, "Protected resource served");

    Ok(HttpResponse::Ok().json(
        MessageResponse::new("This is protected data, authenticated user access only")
            .with_user(principal),
    ))
}

/// Handler for GET /api/admin
///
/// Like [`protected`], and additionally requires the `admin` role.
///
/// ## Errors
/// - 401 Unauthorized: Header missing, or the token is not usable
/// - 403 Forbidden: The principal is not an admin
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn admin<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    token: BearerToken,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    let principal = state
        .session_service
        .authorize(token.as_str(), Some(ADMIN_ROLE))
        .await?;

    Ok(HttpResponse::Ok().json(
        MessageResponse::new("This is admin data, admin role required").with_user(principal),
    ))
}
