// crates/vouch-core/src/traits.rs

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::VouchError;
use crate::identifier::DomainIdentifier;

/// Trait for a single network signal source.
///
/// Implemented by the DNS, website and WHOIS collectors in vouch-signals,
/// and by the memoizing `Cached` decorator in vouch-store.
#[async_trait]
pub trait SignalCollector: Send + Sync {
    /// The signal produced. Must round-trip through JSON for caching.
    type Signal: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Cache key namespace, e.g. `dns` for keys `dns:<domain>`.
    fn namespace(&self) -> &'static str;

    /// Collect the signal. Infallible: failures are folded into the
    /// signal's negative representation.
    async fn collect(&self, domain: &DomainIdentifier) -> Self::Signal;
}

#[async_trait]
impl<T: SignalCollector + ?Sized> SignalCollector for Box<T> {
    type Signal = T::Signal;

    fn namespace(&self) -> &'static str {
        (**self).namespace()
    }

    async fn collect(&self, domain: &DomainIdentifier) -> Self::Signal {
        (**self).collect(domain).await
    }
}

/// Trait for a raw key/value store with per-entry expiry.
///
/// Implemented by vouch-store (in-memory and RocksDB backends). Backends may
/// fail; callers go through the fail-open `SignalCache` facade.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Fetch a live entry. Expired entries are reported as `None`.
    async fn get_raw(&self, key: &str) -> Result<Option<String>, VouchError>;

    /// Store a value that expires after `ttl`. Overwrites any existing entry.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), VouchError>;
}
