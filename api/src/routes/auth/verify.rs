use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{TokenRequest, VerifyResponse};
use crate::handlers::ApiError;

use tg_core::{Clock, RevocationStore, UserRepository};

/// Handler for POST /api/auth/verify
///
/// Reports whether an access token is currently usable. Any failure, including an
/// unreachable revocation store, answers `false` rather than an error.
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
/// { "valid": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Token not provided
pub async fn verify<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<TokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    request.validate()?;

    let valid = state.session_service.verify(request.token()).await;

    Ok(HttpResponse::Ok().json(VerifyResponse { valid }))
}
