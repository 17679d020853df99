// crates/vouch-store/src/cache.rs
//
// SignalCache: typed, fail-open facade over a `CacheBackend`.
//
// Neither operation ever fails. A read error or an undecodable entry is a
// miss; a write error is dropped. The engine keeps answering while the store
// is down, at the cost of repeating upstream lookups.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use vouch_core::traits::CacheBackend;

/// Typed JSON cache that absorbs every backend failure.
#[derive(Clone)]
pub struct SignalCache {
    backend: Arc<dyn CacheBackend>,
}

impl SignalCache {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Look up and decode `key`. `None` on miss, expiry, or any failure.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_raw(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "undecodable cache entry, treating as miss");
                None
            }
        }
    }

    /// Encode and store `value` under `key` for `ttl`. Failures are logged
    /// and otherwise ignored.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache value not serializable, skipping write");
                return;
            }
        };

        if let Err(e) = self.backend.set_raw(key, &raw, ttl).await {
            tracing::warn!(key, error = %e, "cache write failed, skipping");
        }
    }
}

impl std::fmt::Debug for SignalCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalCache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use vouch_core::error::VouchError;

    use crate::memory::MemoryCache;

    /// Backend that fails every call, as if the store were unreachable.
    struct DownBackend;

    #[async_trait]
    impl CacheBackend for DownBackend {
        async fn get_raw(&self, _key: &str) -> Result<Option<String>, VouchError> {
            Err(VouchError::Cache("connection refused".to_string()))
        }

        async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), VouchError> {
            Err(VouchError::Cache("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn typed_roundtrip() {
        let cache = SignalCache::new(Arc::new(MemoryCache::new()));
        cache.set("whois:example.com", &Some(4000i64), Duration::from_secs(60)).await;
        let hit: Option<Option<i64>> = cache.get("whois:example.com").await;
        assert_eq!(hit, Some(Some(4000)));
    }

    #[tokio::test]
    async fn cached_null_is_a_hit() {
        let cache = SignalCache::new(Arc::new(MemoryCache::new()));
        cache.set("whois:private.test", &None::<i64>, Duration::from_secs(60)).await;
        let hit: Option<Option<i64>> = cache.get("whois:private.test").await;
        assert_eq!(hit, Some(None));
    }

    #[tokio::test]
    async fn down_backend_reads_as_miss() {
        let cache = SignalCache::new(Arc::new(DownBackend));
        let hit: Option<u32> = cache.get("dns:example.com").await;
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn down_backend_write_is_noop() {
        let cache = SignalCache::new(Arc::new(DownBackend));
        cache.set("dns:example.com", &42u32, Duration::from_secs(60)).await;
    }

    #[tokio::test]
    async fn wrong_shape_reads_as_miss() {
        let backend = Arc::new(MemoryCache::new());
        backend
            .set_raw("web:example.com", "\"just a string\"", Duration::from_secs(60))
            .await
            .unwrap();
        let cache = SignalCache::new(backend);
        let hit: Option<Vec<u32>> = cache.get("web:example.com").await;
        assert!(hit.is_none());
    }
}
