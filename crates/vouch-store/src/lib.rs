// crates/vouch-store/src/lib.rs
//
// vouch-store: Signal cache for the Vouch trust engine.
//
// Provides the `CacheEntry` expiry record, an in-memory backend, a
// RocksDB-backed persistent backend, the fail-open `SignalCache` facade that
// never surfaces backend errors, and the `Cached` decorator that memoizes any
// `SignalCollector` under `<namespace>:<domain>` keys.

pub mod cache;
pub mod entry;
pub mod memo;
pub mod memory;
pub mod rocks;

// Re-export key types for ergonomic access from downstream crates.
pub use cache::SignalCache;
pub use entry::CacheEntry;
pub use memo::{cache_key, Cached};
pub use memory::MemoryCache;
pub use rocks::RocksCache;
