//! Redis-backed revocation store

use async_trait::async_trait;
use tracing::debug;

use tg_core::errors::{DomainError, DomainResult};
use tg_core::repositories::RevocationStore;

use super::redis_client::{mask_key, RedisClient};

/// Revocation store over a shared Redis instance
///
/// Expiry is delegated to Redis key TTLs. Every client failure, including
/// timeouts, is reported as `StoreUnavailable`.
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()> {
        // Redis rejects EX 0; an entry with no lifetime left is simply absent.
        if ttl_seconds == 0 {
            debug!(key = %mask_key(key), "Zero TTL, removing key instead of setting it");
            self.client.delete(key).await?;
            return Ok(());
        }

        self.client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(DomainError::from)
    }

    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.client.get(key).await?)
    }

    async fn exists(&self, key: &str) -> DomainResult<bool> {
        Ok(self.client.exists(key).await?)
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        Ok(self.client.delete(key).await?)
    }

    async fn health_check(&self) -> DomainResult<()> {
        if self.client.health_check().await? {
            Ok(())
        } else {
            Err(DomainError::store_unavailable("unexpected PING response"))
        }
    }
}
