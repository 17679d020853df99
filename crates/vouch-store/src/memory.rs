// crates/vouch-store/src/memory.rs
//
// In-process cache backend. Safe for concurrent get/set on the same key;
// concurrent writers resolve as last-write-wins. Expired entries are evicted
// when read, and by a full sweep every `sweep_interval` writes so that keys
// which are never read again do not accumulate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use vouch_core::error::VouchError;
use vouch_core::traits::CacheBackend;

use crate::entry::CacheEntry;

/// Writes between full sweeps of expired entries.
pub const DEFAULT_SWEEP_INTERVAL: usize = 1024;

/// HashMap-backed cache with lazy eviction of expired entries.
#[derive(Debug)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    writes: AtomicUsize,
    sweep_interval: usize,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::with_sweep_interval(DEFAULT_SWEEP_INTERVAL)
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sweep expired entries every `interval` writes (minimum 1).
    pub fn with_sweep_interval(interval: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            writes: AtomicUsize::new(0),
            sweep_interval: interval.max(1),
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, VouchError> {
        let now = Utc::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired_at(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // Expired: evict, unless a writer refreshed it in the meantime.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| e.is_expired_at(now)) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), VouchError> {
        let entry = CacheEntry::new(value, ttl);
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), entry);

        let writes = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
        if writes % self.sweep_interval == 0 {
            let now = Utc::now();
            let before = entries.len();
            entries.retain(|_, e| !e.is_expired_at(now));
            tracing::debug!(evicted = before - entries.len(), "swept expired cache entries");
        }
        Ok(())
    }
}
