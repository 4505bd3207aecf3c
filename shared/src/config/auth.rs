//! Token signing configuration

use serde::{Deserialize, Serialize};

const DEFAULT_ACCESS_SECRET: &str = "development-access-secret-change-in-production-0123456789";
const DEFAULT_REFRESH_SECRET: &str = "development-refresh-secret-change-in-production-9876543210";

/// JWT signing configuration for both token kinds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used to sign access tokens
    pub access_secret: String,

    /// Secret used to sign refresh tokens, must differ from `access_secret`
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_expiry")]
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    #[serde(default = "default_refresh_expiry")]
    pub refresh_token_expiry: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEFAULT_ACCESS_SECRET),
            refresh_secret: String::from(DEFAULT_REFRESH_SECRET),
            access_token_expiry: default_access_expiry(),
            refresh_token_expiry: default_refresh_expiry(),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_ACCESS_SECRET`, `JWT_REFRESH_SECRET`, `JWT_ACCESS_TOKEN_EXPIRY`
    /// and `JWT_REFRESH_TOKEN_EXPIRY`; anything unset falls back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("JWT_ACCESS_SECRET").unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("JWT_REFRESH_SECRET")
                .unwrap_or(defaults.refresh_secret),
            access_token_expiry: std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
            algorithm: defaults.algorithm,
        }
    }

    /// Set access token lifetime in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token lifetime in seconds
    pub fn with_refresh_expiry_seconds(mut self, seconds: i64) -> Self {
        self.refresh_token_expiry = seconds;
        self
    }

    /// Check if either secret is still the built-in development value
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEFAULT_ACCESS_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }
}

fn default_access_expiry() -> i64 {
    15
}

fn default_refresh_expiry() -> i64 {
    600
}

fn default_algorithm() -> String {
    String::from("HS256")
}
