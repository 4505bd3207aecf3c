//! Request and response bodies for the `/api/auth` endpoints
//!
//! Every request field is optional at the serde level so that a missing field reaches
//! validation and is reported as a 400 with the field name, instead of failing in the
//! JSON extractor with an opaque body.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tg_core::{LoginCredentials, Principal};

#[derive(Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(required)]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(required)]
    pub password: Option<String>,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl LoginRequest {
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials::new(
            self.email.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        )
    }
}

/// Body of `/verify` and `/me`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TokenRequest {
    #[serde(default)]
    #[validate(required)]
    pub token: Option<String>,
}

impl TokenRequest {
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    #[validate(required)]
    pub refresh_token: Option<String>,
}

impl RefreshTokenRequest {
    pub fn refresh_token(&self) -> &str {
        self.refresh_token.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    #[serde(default)]
    #[validate(required)]
    pub access_token: Option<String>,
    #[serde(default)]
    #[validate(required)]
    pub user_id: Option<String>,
}

impl LogoutRequest {
    pub fn access_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or_default()
    }

    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Message body of the demonstration endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Principal>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user: None,
        }
    }

    pub fn with_user(mut self, user: Principal) -> Self {
        self.user = Some(user);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_request_reads_camel_case() {
        let request: RefreshTokenRequest =
            serde_json::from_str(r#"{"refreshToken":"abc"}"#).unwrap();
        assert_eq!(request.refresh_token(), "abc");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_field_fails_validation() {
        let request: LoginRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
        assert!(!errors.field_errors().contains_key("email"));

        let request: LogoutRequest = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_string_is_present() {
        let request: TokenRequest = serde_json::from_str(r#"{"token":""}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.token(), "");
    }

    #[test]
    fn test_message_response_omits_missing_user() {
        let json = serde_json::to_value(MessageResponse::new("hello")).unwrap();
        assert_eq!(json["message"], "hello");
        assert!(json.get("user").is_none());
    }
}
