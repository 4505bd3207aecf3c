//! Revocation store trait: the key-value contract behind blacklisting and refresh
//! token rotation.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Key prefix for the subject's current refresh token
pub const REFRESH_KEY_PREFIX: &str = "refresh:";

/// Key prefix for blacklisted access tokens
pub const BLACKLIST_KEY_PREFIX: &str = "blacklist:";

/// Value stored under a blacklist key
pub const BLACKLIST_MARKER: &str = "blacklisted";

/// Store key holding the current refresh token for `subject_id`
pub fn refresh_key(subject_id: &str) -> String {
    format!("{}{}", REFRESH_KEY_PREFIX, subject_id)
}

/// Store key marking `token` as revoked
pub fn blacklist_key(token: &str) -> String {
    format!("{}{}", BLACKLIST_KEY_PREFIX, token)
}

/// Key-value store with per-key expiry
///
/// Implementations enforce expiry themselves: once a key's TTL elapses, `get` and
/// `exists` observe it as absent. Every single-key operation must be atomic.
///
/// Failures of the backing service (connection loss, timeouts) are reported as
/// `DomainError::StoreUnavailable` and must never be folded into "absent".
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Upsert `value` under `key`, replacing both the value and the expiry
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()>;

    /// Fetch the value under `key`, `None` when absent or expired
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Check whether `key` is present and unexpired
    async fn exists(&self, key: &str) -> DomainResult<bool>;

    /// Remove `key`, returning `true` only if a live key was removed
    async fn delete(&self, key: &str) -> DomainResult<bool>;

    /// Probe the backing service
    async fn health_check(&self) -> DomainResult<()> {
        Ok(())
    }
}

#[async_trait]
impl<T: RevocationStore + ?Sized> RevocationStore for std::sync::Arc<T> {
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()> {
        (**self).set(key, value, ttl_seconds).await
    }

    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key).await
    }

    async fn exists(&self, key: &str) -> DomainResult<bool> {
        (**self).exists(key).await
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        (**self).delete(key).await
    }

    async fn health_check(&self) -> DomainResult<()> {
        (**self).health_check().await
    }
}
