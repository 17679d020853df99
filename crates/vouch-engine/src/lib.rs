// crates/vouch-engine/src/lib.rs
//
// vouch-engine: Verification orchestrator for the Vouch trust engine.
//
// Normalizes an identifier, serves the composite result from cache when
// fresh, otherwise runs the DNS, website and WHOIS collectors concurrently
// (each memoized under its own key), scores the signals, and caches the
// composite document.

pub mod config;
pub mod response;
pub mod verifier;

// Re-export the main types for ergonomic access.
pub use config::{CacheBackendKind, CacheConfig, EngineConfig};
pub use response::VerificationResponse;
pub use verifier::{Verifier, COMPOSITE_NAMESPACE};
