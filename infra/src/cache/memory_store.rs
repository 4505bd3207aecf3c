//! In-process revocation store for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tg_core::errors::DomainResult;
use tg_core::repositories::RevocationStore;
use tg_core::services::token::{Clock, SystemClock};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: i64,
}

/// Revocation store kept in a `HashMap`
///
/// Entries expire lazily: reads compare `expires_at` against the injected clock,
/// and expired entries are swept on the next write. Not shared across processes.
#[derive(Clone)]
pub struct InMemoryRevocationStore<C: Clock = SystemClock> {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    clock: C,
}

impl InMemoryRevocationStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryRevocationStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryRevocationStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Number of unexpired entries
    pub async fn len(&self) -> usize {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries.values().filter(|e| e.expires_at > now).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Remaining lifetime of a live key in seconds
    pub async fn ttl(&self, key: &str) -> Option<i64> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|e| e.expires_at > now)
            .map(|e| e.expires_at - now)
    }
}

#[async_trait]
impl<C: Clock + 'static> RevocationStore for InMemoryRevocationStore<C> {
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()> {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.expires_at > now);

        if ttl_seconds == 0 {
            entries.remove(key);
            return Ok(());
        }

        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: now.saturating_add(ttl),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|e| e.expires_at > now)
            .map(|e| e.value.clone()))
    }

    async fn exists(&self, key: &str) -> DomainResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        Ok(matches!(entries.remove(key), Some(e) if e.expires_at > now))
    }
}
