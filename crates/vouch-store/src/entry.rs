// crates/vouch-store/src/entry.rs
//
// A cached value paired with its absolute expiry time.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A JSON-encoded value with an absolute expiry.
///
/// Owned by the cache backends; nothing outside vouch-store sees raw entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// JSON-serialized payload.
    pub value: String,
    /// Instant after which the entry is treated as a miss.
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry expiring `ttl` from now.
    pub fn new(value: impl Into<String>, ttl: Duration) -> Self {
        Self::new_at(value, ttl, Utc::now())
    }

    /// Create an entry expiring `ttl` after `now`. Saturates instead of
    /// overflowing for absurd TTLs.
    pub fn new_at(value: impl Into<String>, ttl: Duration, now: DateTime<Utc>) -> Self {
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Whether the entry is stale at `now`. An entry is stale from its
    /// expiry instant onward.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_expires_after_ttl() {
        let now = Utc::now();
        let entry = CacheEntry::new_at("1", Duration::from_secs(60), now);
        assert!(!entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now + chrono::Duration::seconds(59)));
        assert!(entry.is_expired_at(now + chrono::Duration::seconds(60)));
    }

    #[test]
    fn zero_ttl_is_immediately_stale() {
        let now = Utc::now();
        let entry = CacheEntry::new_at("1", Duration::ZERO, now);
        assert!(entry.is_expired_at(now));
    }

    #[test]
    fn huge_ttl_saturates() {
        let entry = CacheEntry::new("1", Duration::from_secs(u64::MAX));
        assert_eq!(entry.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(!entry.is_expired());
    }
}
