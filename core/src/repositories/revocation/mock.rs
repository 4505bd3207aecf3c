//! Mock implementation of RevocationStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::{DomainError, DomainResult};
use crate::services::token::{Clock, ManualClock};

use super::r#trait::RevocationStore;

/// Mock revocation store with clock-driven expiry, a write counter and an outage switch
#[derive(Clone)]
pub struct MockRevocationStore {
    entries: Arc<RwLock<HashMap<String, (String, i64)>>>,
    clock: ManualClock,
    writes: Arc<AtomicUsize>,
    unavailable: Arc<AtomicBool>,
}

impl MockRevocationStore {
    /// Create a new mock store that expires entries against `clock`
    pub fn new(clock: ManualClock) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
            writes: Arc::new(AtomicUsize::new(0)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent call fail with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `set` and `delete` calls observed
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Remaining TTL of a live key
    pub async fn ttl(&self, key: &str) -> Option<i64> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(_, expires_at)| expires_at - now)
    }

    fn check_available(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable("mock store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);

        let expires_at = self.clock.now() + ttl_seconds as i64;
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.check_available()?;
        let now = self.clock.now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(value, _)| value.clone()))
    }

    async fn exists(&self, key: &str) -> DomainResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);

        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        Ok(matches!(entries.remove(key), Some((_, expires_at)) if expires_at > now))
    }

    async fn health_check(&self) -> DomainResult<()> {
        self.check_available()
    }
}
