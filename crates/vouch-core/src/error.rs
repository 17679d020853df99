use thiserror::Error;

/// Engine-wide error types for Vouch.
///
/// Only `InvalidInput` is ever surfaced by the orchestrator; every other
/// variant is absorbed by the component that produced it.
#[derive(Debug, Error)]
pub enum VouchError {
    /// The identifier could not be reduced to a domain.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Cache backend error (unavailable store, I/O failure).
    #[error("Cache error: {0}")]
    Cache(String),

    /// DNS or WHOIS lookup failure.
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Outbound HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid or unreadable configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for VouchError {
    fn from(e: serde_json::Error) -> Self {
        VouchError::Serialization(e.to_string())
    }
}
