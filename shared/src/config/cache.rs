//! Redis configuration for the revocation store

use serde::{Deserialize, Serialize};

/// Which revocation store the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Shared Redis instance
    #[default]
    Redis,
    /// Process-local map; entries are lost on restart and not shared between instances
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Redis => write!(f, "redis"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid revocation store: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Revocation store backend
    #[serde(default)]
    pub backend: StoreBackend,

    /// Redis connection URL
    pub url: String,

    /// Connection timeout in milliseconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_ms: u64,

    /// Per-command response timeout in milliseconds
    #[serde(default = "default_response_timeout")]
    pub response_timeout_ms: u64,

    /// Maximum attempts for a single operation, including the first
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retries (doubled per attempt, capped)
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: String::from("redis://127.0.0.1:6379"),
            connection_timeout_ms: default_connection_timeout(),
            response_timeout_ms: default_response_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: env_or("REVOCATION_STORE", defaults.backend),
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            connection_timeout_ms: env_or("REDIS_CONNECTION_TIMEOUT_MS", defaults.connection_timeout_ms),
            response_timeout_ms: env_or("REDIS_RESPONSE_TIMEOUT_MS", defaults.response_timeout_ms),
            max_retries: env_or("REDIS_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_or("REDIS_RETRY_DELAY_MS", defaults.retry_delay_ms),
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Select the revocation store backend
    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the per-command response timeout
    pub fn with_response_timeout_ms(mut self, millis: u64) -> Self {
        self.response_timeout_ms = millis.max(1);
        self
    }

    /// Set retry behaviour
    pub fn with_retries(mut self, max_retries: u32, retry_delay_ms: u64) -> Self {
        self.max_retries = max_retries.max(1);
        self.retry_delay_ms = retry_delay_ms;
        self
    }
}

fn env_or<T: std::str::FromStr>(name: &str, fallback: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

fn default_connection_timeout() -> u64 {
    2000
}

fn default_response_timeout() -> u64 {
    500
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.backend, StoreBackend::Redis);
        assert_eq!(config.url, "redis://127.0.0.1:6379");
        assert_eq!(config.response_timeout_ms, 500);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_timeouts_are_never_zero() {
        let config = CacheConfig::new("redis://cache:6379")
            .with_response_timeout_ms(0)
            .with_retries(0, 10);

        assert_eq!(config.url, "redis://cache:6379");
        assert_eq!(config.response_timeout_ms, 1);
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("Redis".parse::<StoreBackend>().unwrap(), StoreBackend::Redis);
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }
}
