// crates/vouch-store/src/memo.rs
//
// Cached<C>: memoizing decorator for any `SignalCollector`.
//
// Wraps a collector so that `collect` first consults the signal cache under
// `<namespace>:<domain>` and only calls through on a miss, storing whatever
// the inner collector returns (negative results included) for `ttl`.
// `refresh` skips the read and always overwrites the entry.

use std::time::Duration;

use async_trait::async_trait;

use vouch_core::identifier::DomainIdentifier;
use vouch_core::traits::SignalCollector;

use crate::cache::SignalCache;

/// Build the cache key for a signal: `<namespace>:<domain>`.
pub fn cache_key(namespace: &str, domain: &DomainIdentifier) -> String {
    format!("{}:{}", namespace, domain)
}

/// A collector whose results are memoized in a `SignalCache`.
///
/// Two entry points:
/// - `refresh` always calls the inner collector and overwrites the entry.
///   `vouch_engine::Verifier` uses only this one, because a composite miss
///   must re-collect every signal.
/// - `SignalCollector::collect` reads through the cache. It is for callers
///   that consume a single signal directly; no code in this workspace uses
///   it outside tests.
#[derive(Debug)]
pub struct Cached<C> {
    inner: C,
    cache: SignalCache,
    ttl: Duration,
}

impl<C: SignalCollector> Cached<C> {
    pub fn new(inner: C, cache: SignalCache, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Collect from the inner source unconditionally and overwrite the
    /// cached entry, warm or not.
    pub async fn refresh(&self, domain: &DomainIdentifier) -> C::Signal {
        let signal = self.inner.collect(domain).await;
        let key = cache_key(self.inner.namespace(), domain);
        self.cache.set(&key, &signal, self.ttl).await;
        signal
    }
}

#[async_trait]
impl<C: SignalCollector> SignalCollector for Cached<C> {
    type Signal = C::Signal;

    fn namespace(&self) -> &'static str {
        self.inner.namespace()
    }

    async fn collect(&self, domain: &DomainIdentifier) -> Self::Signal {
        let key = cache_key(self.namespace(), domain);
        if let Some(hit) = self.cache.get::<Self::Signal>(&key).await {
            tracing::debug!(key = %key, "signal cache hit");
            return hit;
        }

        self.refresh(domain).await
    }
}
