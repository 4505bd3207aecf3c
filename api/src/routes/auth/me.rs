use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::TokenRequest;
use crate::handlers::ApiError;

use tg_core::{Clock, RevocationStore, UserRepository};

/// Handler for POST /api/auth/me
///
/// Returns the principal carried by a usable access token. A logged-out token is
/// rejected even though its signature and expiry are still valid.
///
/// # Request Body
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "id": "1", "email": "test@example.com", "name": "Test User", "role": "user" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Token not provided
/// - 401 Unauthorized: Invalid, expired or revoked token
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn me<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<TokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    request.validate()?;

    let principal = state.session_service.who_am_i(request.token()).await?;

    Ok(HttpResponse::Ok().json(principal))
}
