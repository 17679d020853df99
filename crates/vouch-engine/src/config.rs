// crates/vouch-engine/src/config.rs
//
// Engine configuration: cache settings plus per-collector settings.
// Every field has a serde default so partial TOML files load cleanly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use vouch_signals::{DnsConfig, WebsiteConfig, WhoisConfig};

/// Which store backs the signal cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackendKind {
    /// Process-local; lost on restart.
    Memory,
    /// Persistent RocksDB database at `CacheConfig::path`.
    Rocksdb,
}

/// Signal cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_backend")]
    pub backend: CacheBackendKind,

    /// Database directory for the RocksDB backend.
    #[serde(default = "default_path")]
    pub path: String,

    /// TTL for `dns:`, `web:` and `whois:` entries.
    #[serde(default = "default_ttl_secs")]
    pub signal_ttl_secs: u64,

    /// TTL for `verify:` entries, tracked independently of signal TTLs.
    #[serde(default = "default_ttl_secs")]
    pub composite_ttl_secs: u64,
}

fn default_backend() -> CacheBackendKind {
    CacheBackendKind::Memory
}

fn default_path() -> String {
    "~/.vouch/cache".to_string()
}

fn default_ttl_secs() -> u64 {
    60 * 60 * 24
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_path(),
            signal_ttl_secs: default_ttl_secs(),
            composite_ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    pub fn signal_ttl(&self) -> Duration {
        Duration::from_secs(self.signal_ttl_secs)
    }

    pub fn composite_ttl(&self) -> Duration {
        Duration::from_secs(self.composite_ttl_secs)
    }
}

/// Everything needed to build a `Verifier`, minus the cache backend itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub dns: DnsConfig,
    #[serde(default)]
    pub website: WebsiteConfig,
    #[serde(default)]
    pub whois: WhoisConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one_day() {
        let config = EngineConfig::default();
        assert_eq!(config.cache.signal_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.cache.composite_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.cache.backend, CacheBackendKind::Memory);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"cache":{"backend":"rocksdb","composite_ttl_secs":60},"website":{"timeout_secs":3}}"#)
                .unwrap();
        assert_eq!(config.cache.backend, CacheBackendKind::Rocksdb);
        assert_eq!(config.cache.composite_ttl_secs, 60);
        assert_eq!(config.cache.signal_ttl_secs, 86_400);
        assert_eq!(config.website.timeout_secs, 3);
        assert_eq!(config.website.max_redirects, 3);
        assert_eq!(config.whois.bootstrap_server, "whois.iana.org:43");
    }
}
