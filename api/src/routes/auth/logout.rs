use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{LogoutRequest, LogoutResponse};
use crate::handlers::ApiError;

use tg_core::{Clock, RevocationStore, UserRepository};

/// Handler for POST /api/auth/logout
///
/// Blacklists the access token for its remaining lifetime and revokes the subject's
/// refresh token. An access token that is already expired or malformed is skipped;
/// the refresh token is revoked regardless.
///
/// # Request Body
///
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "userId": "1"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Access token or user id not provided
/// - 503 Service Unavailable: Either revocation write failed
pub async fn logout<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<LogoutRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    request.validate()?;

    state
        .session_service
        .logout(request.access_token(), request.user_id())
        .await?;

    Ok(HttpResponse::Ok().json(LogoutResponse { success: true }))
}
