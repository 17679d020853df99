// crates/vouch-core/src/lib.rs
//
// vouch-core: Core types, traits, and identifier normalization for the
// Vouch domain trust engine.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the signal data model, the composite score document, the error
// type, and the trait seams used by collectors and cache backends.

pub mod error;
pub mod identifier;
pub mod result;
pub mod signal;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use vouch_core::DomainIdentifier;`

pub use identifier::DomainIdentifier;

pub use signal::{DnsSignal, DomainAgeSignal, MxRecord, SearchHit, WebsiteSignal};

pub use result::{TrustScoreResult, Verdict};

pub use error::VouchError;

pub use traits::{CacheBackend, SignalCollector};
