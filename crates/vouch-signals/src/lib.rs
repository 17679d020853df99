// crates/vouch-signals/src/lib.rs
//
// vouch-signals: Network signal collectors for the Vouch trust engine.
//
// Each collector implements `SignalCollector` and never fails: DNS misses,
// unreachable sites, and unparseable WHOIS answers all become the signal's
// negative value. Caching is layered on top by `vouch_store::Cached`.

pub mod dns;
pub mod website;
pub mod whois;

// Re-export key types for ergonomic access from downstream crates.
pub use dns::{DnsCollector, DnsConfig};
pub use website::{WebsiteCollector, WebsiteConfig};
pub use whois::{WhoisClient, WhoisCollector, WhoisConfig, WhoisRecord};
