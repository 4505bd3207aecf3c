//! Cache module for revocation state
//!
//! Redis client with retry and timeout handling, plus the two revocation store
//! implementations.

pub mod memory_store;
pub mod redis_client;
pub mod revocation_store;


pub use memory_store::InMemoryRevocationStore;
pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

// Re-export commonly used types
pub use tg_shared::config::CacheConfig;
