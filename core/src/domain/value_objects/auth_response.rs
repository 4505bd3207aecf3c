//! Login input and output value objects.

use serde::{Deserialize, Serialize};

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::TokenPair;

/// Credentials presented at login
#[derive(Clone, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a successful login: the authenticated principal and its token pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: Principal,
    pub tokens: TokenPair,
}

impl AuthResponse {
    pub fn new(user: Principal, tokens: TokenPair) -> Self {
        Self { user, tokens }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = LoginCredentials::new("test@example.com", "password");
        let rendered = format!("{:?}", credentials);

        assert!(rendered.contains("test@example.com"));
        assert!(!rendered.contains("\"password\""));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_auth_response_shape() {
        let response = AuthResponse::new(
            Principal::new("1", "test@example.com", "Test User", "user"),
            TokenPair::new("a".to_string(), "r".to_string()),
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["user"]["id"], "1");
        assert_eq!(json["tokens"]["accessToken"], "a");
    }
}
