use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::RefreshTokenRequest;
use crate::handlers::ApiError;

use tg_core::{Clock, RevocationStore, UserRepository};

/// Handler for POST /api/auth/refresh
///
/// Exchanges the subject's current refresh token for a new pair. The presented
/// refresh token stops working as soon as this succeeds.
///
/// # Request Body
///
/// ```json
/// { "refreshToken": "eyJ..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Refresh token not provided
/// - 401 Unauthorized: Invalid, expired, superseded or revoked refresh token
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn refresh<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    request.validate()?;

    let tokens = state.session_service.refresh(request.refresh_token()).await?;

    Ok(HttpResponse::Ok().json(tokens))
}
