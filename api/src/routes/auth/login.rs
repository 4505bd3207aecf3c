use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::ApiError;

use tg_core::{Clock, RevocationStore, UserRepository};

/// Handler for POST /api/auth/login
///
/// Authenticates email and password against the principal directory and issues a
/// new token pair. Logging in again replaces the subject's previous refresh token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "test@example.com",
///     "password": "password"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user": { "id": "1", "email": "test@example.com", "name": "Test User", "role": "user" },
///     "tokens": { "accessToken": "eyJ...", "refreshToken": "eyJ..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing email or password
/// - 401 Unauthorized: Unknown email or wrong password
/// - 503 Service Unavailable: The refresh token could not be stored
pub async fn login<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
    C: Clock + 'static,
{
    request.validate()?;

    let response = state.session_service.login(&request.credentials()).await?;

    Ok(HttpResponse::Ok().json(response))
}
