// crates/vouch-store/src/rocks.rs
//
// RocksDB-backed persistent cache backend.
//
// Key format: the signal cache key itself (`dns:{domain}`, `web:{domain}`,
// `whois:{domain}`, `verify:{domain}`) -> JSON-serialized `CacheEntry`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rocksdb::{DBWithThreadMode, MultiThreaded, Options};

use vouch_core::error::VouchError;
use vouch_core::traits::CacheBackend;

use crate::entry::CacheEntry;

/// RocksDB wrapper implementing the `CacheBackend` trait.
#[derive(Debug)]
pub struct RocksCache {
    db: DBWithThreadMode<MultiThreaded>,
}

impl RocksCache {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, VouchError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path)
            .map_err(|e| VouchError::Cache(format!("Failed to open RocksDB at {}: {}", path, e)))?;

        Ok(Self { db })
    }

    fn read_entry(&self, key: &str) -> Result<Option<CacheEntry>, VouchError> {
        let bytes = self
            .db
            .get(key.as_bytes())
            .map_err(|e| VouchError::Cache(format!("RocksDB get failed: {}", e)))?;
        match bytes {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn delete(&self, key: &str) -> Result<(), VouchError> {
        self.db
            .delete(key.as_bytes())
            .map_err(|e| VouchError::Cache(format!("RocksDB delete failed: {}", e)))
    }
}

#[async_trait]
impl CacheBackend for RocksCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, VouchError> {
        match self.read_entry(key)? {
            Some(entry) if entry.is_expired_at(Utc::now()) => {
                self.delete(key)?;
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value)),
            None => Ok(None),
        }
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), VouchError> {
        let json = serde_json::to_vec(&CacheEntry::new(value, ttl))?;
        self.db
            .put(key.as_bytes(), json)
            .map_err(|e| VouchError::Cache(format!("RocksDB put failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// Create a temporary directory path using UUID to avoid conflicts.
    fn temp_db_path(label: &str) -> String {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("vouch_test_{}_{}", label, Uuid::now_v7()));
        path.to_string_lossy().to_string()
    }

    #[tokio::test]
    async fn roundtrip_live_entry() {
        let path = temp_db_path("live");
        let cache = RocksCache::open(&path).unwrap();
        cache
            .set_raw("verify:example.com", "{\"trust_score\":90}", Duration::from_secs(3600))
            .await
            .unwrap();
        let value = cache.get_raw("verify:example.com").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"trust_score\":90}"));
        let _ = std::fs::remove_dir_all(&path);
    }

    #[tokio::test]
    async fn expired_entry_is_deleted() {
        let path = temp_db_path("expired");
        let cache = RocksCache::open(&path).unwrap();
        cache.set_raw("dns:gone.test", "{}", Duration::ZERO).await.unwrap();
        assert!(cache.get_raw("dns:gone.test").await.unwrap().is_none());
        assert!(cache.read_entry("dns:gone.test").unwrap().is_none());
        let _ = std::fs::remove_dir_all(&path);
    }

    #[tokio::test]
    async fn entries_survive_reopen() {
        let path = temp_db_path("reopen");
        {
            let cache = RocksCache::open(&path).unwrap();
            cache.set_raw("whois:example.com", "4000", Duration::from_secs(3600)).await.unwrap();
        }
        let cache = RocksCache::open(&path).unwrap();
        assert_eq!(cache.get_raw("whois:example.com").await.unwrap().as_deref(), Some("4000"));
        let _ = std::fs::remove_dir_all(&path);
    }

    #[tokio::test]
    async fn corrupt_entry_is_an_error() {
        let path = temp_db_path("corrupt");
        let cache = RocksCache::open(&path).unwrap();
        cache.db.put(b"web:bad.test", b"not json").unwrap();
        assert!(matches!(
            cache.get_raw("web:bad.test").await,
            Err(VouchError::Serialization(_))
        ));
        let _ = std::fs::remove_dir_all(&path);
    }
}
