//! Configuration module
//!
//! - `auth` - access/refresh signing secrets and token lifetimes
//! - `cache` - Redis connection and timeout settings for the revocation store
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod cache;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::JwtConfig;
pub use cache::{CacheConfig, StoreBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Revocation store configuration
    pub cache: CacheConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
            cache: CacheConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// `LOG_LEVEL` overrides the per-environment default filter.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cache: CacheConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_is_development() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.jwt.access_token_expiry, 15);
    }
}
