//! Bearer token extraction for protected endpoints.
//!
//! The extractor only reads the header. Whether the token is usable is decided by the
//! session service in the handler, so revocation is always consulted.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, FromRequest, HttpRequest};

use crate::handlers::ApiError;

/// Raw access token taken from `Authorization: Bearer <token>`
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for BearerToken {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = extract_bearer_token(req).map(BearerToken).ok_or_else(|| {
            tracing::debug!(path = %req.path(), "Missing or malformed Authorization header");
            ApiError::MissingBearer
        });
        ready(result)
    }
}

/// Extracts the token from a `Bearer` Authorization header
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
