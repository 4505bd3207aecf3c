//! # Infrastructure Layer
//!
//! Concrete implementations of the core contracts:
//! - **Cache**: Redis client with retries and per-call timeouts, the Redis-backed
//!   revocation store, and an in-memory store for tests and local development
//! - **Directory**: the static principal directory used by login and refresh

use tg_core::errors::DomainError;

/// Cache module - Redis client and revocation stores
pub mod cache;

/// Directory module - principal lookup
pub mod directory;

pub use cache::{InMemoryRevocationStore, RedisClient, RedisRevocationStore};
pub use directory::StaticUserRepository;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// A Redis call did not complete within its deadline
    #[error("Cache operation timed out after {0}ms")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Config(message) => DomainError::Configuration { message },
            other => DomainError::StoreUnavailable {
                message: other.to_string(),
            },
        }
    }
}
