//! Configuration for the token service

use tg_shared::config::JwtConfig;

use crate::domain::entities::token::{DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_REFRESH_TTL_SECONDS};
use crate::errors::DomainError;

/// Longest lifetime accepted for either token (one year)
pub const MAX_TOKEN_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Secret used to sign access tokens
    pub access_secret: String,
    /// Secret used to sign refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime in seconds
    pub access_ttl_seconds: i64,
    /// Refresh token lifetime in seconds, also the TTL of the stored refresh entry
    pub refresh_ttl_seconds: i64,
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenServiceConfig {
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl_seconds: DEFAULT_ACCESS_TTL_SECONDS,
            refresh_ttl_seconds: DEFAULT_REFRESH_TTL_SECONDS,
        }
    }

    /// Builds the service configuration from the shared JWT settings
    ///
    /// Only HS256 is supported; any other algorithm name is rejected.
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        if !jwt.algorithm.eq_ignore_ascii_case("HS256") {
            return Err(DomainError::Configuration {
                message: format!("Unsupported JWT algorithm: {}", jwt.algorithm),
            });
        }

        let config = Self {
            access_secret: jwt.access_secret.clone(),
            refresh_secret: jwt.refresh_secret.clone(),
            access_ttl_seconds: jwt.access_token_expiry,
            refresh_ttl_seconds: jwt.refresh_token_expiry,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that both lifetimes are positive and at most [`MAX_TOKEN_TTL_SECONDS`]
    pub fn validate(&self) -> Result<(), DomainError> {
        let valid = 1..=MAX_TOKEN_TTL_SECONDS;
        if !valid.contains(&self.access_ttl_seconds) || !valid.contains(&self.refresh_ttl_seconds) {
            return Err(DomainError::Configuration {
                message: format!(
                    "Token lifetimes must be between 1 and {} seconds",
                    MAX_TOKEN_TTL_SECONDS
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_jwt_config_copies_lifetimes() {
        let jwt = JwtConfig::new("access", "refresh")
            .with_access_expiry_seconds(30)
            .with_refresh_expiry_seconds(900);
        let config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();

        assert_eq!(config.access_ttl_seconds, 30);
        assert_eq!(config.refresh_ttl_seconds, 900);
    }

    #[test]
    fn test_rejects_other_algorithms() {
        let mut jwt = JwtConfig::new("access", "refresh");
        jwt.algorithm = "RS256".to_string();
        assert!(TokenServiceConfig::from_jwt_config(&jwt).is_err());
    }

    #[test]
    fn test_rejects_non_positive_lifetimes() {
        let jwt = JwtConfig::new("access", "refresh").with_access_expiry_seconds(0);
        assert!(TokenServiceConfig::from_jwt_config(&jwt).is_err());
    }

    #[test]
    fn test_rejects_oversized_lifetimes() {
        let jwt = JwtConfig::new("access", "refresh").with_access_expiry_seconds(i64::MAX);
        assert!(matches!(
            TokenServiceConfig::from_jwt_config(&jwt),
            Err(DomainError::Configuration { .. })
        ));

        let jwt = JwtConfig::new("access", "refresh")
            .with_refresh_expiry_seconds(MAX_TOKEN_TTL_SECONDS + 1);
        assert!(TokenServiceConfig::from_jwt_config(&jwt).is_err());

        let jwt = JwtConfig::new("access", "refresh")
            .with_refresh_expiry_seconds(MAX_TOKEN_TTL_SECONDS);
        assert!(TokenServiceConfig::from_jwt_config(&jwt).is_ok());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = TokenServiceConfig::new("access-secret", "refresh-secret");
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
