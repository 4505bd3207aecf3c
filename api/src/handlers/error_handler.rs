//! Mapping from domain errors to HTTP responses
//!
//! Only a coarse code and message leave the server. The precise reason a token was
//! rejected stays in the logs.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use validator::ValidationErrors;

use tg_core::{AuthError, DomainError, TokenError};
use tg_shared::{error_codes, ErrorResponse};

/// Errors returned by request handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationErrors),

    /// No usable `Authorization: Bearer` header
    #[error("Missing bearer token")]
    MissingBearer,

    #[error("Malformed request body: {0}")]
    Payload(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => domain_status(error),
            ApiError::Validation(_) | ApiError::Payload(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingBearer => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::Validation(errors) => handle_validation_errors(errors),
            ApiError::MissingBearer => HttpResponse::Unauthorized().json(ErrorResponse::new(
                error_codes::UNAUTHORIZED,
                "Authentication required",
            )),
            ApiError::Payload(_) => HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::BAD_REQUEST,
                "Malformed request body",
            )),
        }
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Auth(AuthError::AuthenticationFailed) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::InsufficientPermissions) => StatusCode::FORBIDDEN,
        DomainError::Token(TokenError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Configuration { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = domain_status(error);

    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    let body = match error {
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
        }
        DomainError::Auth(AuthError::AuthenticationFailed) => {
            ErrorResponse::new(error_codes::UNAUTHORIZED, "Invalid credentials")
        }
        DomainError::Auth(AuthError::InsufficientPermissions) => {
            ErrorResponse::new(error_codes::FORBIDDEN, "Insufficient permissions")
        }
        DomainError::Token(TokenError::TokenGenerationFailed) => {
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
        DomainError::Token(_) => ErrorResponse::new(error_codes::TOKEN_INVALID, "Invalid token"),
        DomainError::StoreUnavailable { .. } => ErrorResponse::new(
            error_codes::STORE_UNAVAILABLE,
            "Service temporarily unavailable",
        ),
        DomainError::Configuration { .. } | DomainError::Internal { .. } => {
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
    };

    HttpResponse::build(status).json(body)
}

/// Convert field validation failures into a 400 listing the offending fields
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Required parameters missing");

    for (field, field_errors) in errors.field_errors() {
        let codes: Vec<String> = field_errors.iter().map(|e| e.code.to_string()).collect();
        body = body.add_detail(field, codes);
    }

    HttpResponse::BadRequest().json(body)
}

/// Error handler for the JSON extractor, so unparseable bodies get the standard body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    ApiError::Payload(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_token_errors_are_coarse_401() {
        for error in [
            TokenError::InvalidSignature,
            TokenError::Expired,
            TokenError::Blacklisted,
            TokenError::InvalidRefreshToken,
        ] {
            let response = handle_domain_error(&error.into());
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let json = body_json(response).await;
            assert_eq!(json["error"], error_codes::TOKEN_INVALID);
            assert_eq!(json["message"], "Invalid token");
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            domain_status(&AuthError::AuthenticationFailed.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            domain_status(&AuthError::InsufficientPermissions.into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            domain_status(&DomainError::store_unavailable("timeout")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            domain_status(&DomainError::Validation {
                message: "missing".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_status(&TokenError::TokenGenerationFailed.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_store_outage_message_hides_cause() {
        let response = handle_domain_error(&DomainError::store_unavailable("redis://10.0.0.1 refused"));
        let json = body_json(response).await;

        assert_eq!(json["error"], error_codes::STORE_UNAVAILABLE);
        assert!(!json["message"].as_str().unwrap().contains("redis"));
    }

    #[test]
    fn test_missing_bearer_is_401() {
        assert_eq!(ApiError::MissingBearer.status_code(), StatusCode::UNAUTHORIZED);
    }
}
