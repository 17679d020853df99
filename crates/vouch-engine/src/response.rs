// crates/vouch-engine/src/response.rs
//
// Outbound document shape: the score document, or `{"error": "..."}`.

use serde::{Deserialize, Serialize};

use vouch_core::error::VouchError;
use vouch_core::result::TrustScoreResult;

/// What callers serialize back to their clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerificationResponse {
    Verified(TrustScoreResult),
    Rejected { error: String },
}

impl VerificationResponse {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationResponse::Verified(_))
    }
}

impl From<Result<TrustScoreResult, VouchError>> for VerificationResponse {
    fn from(outcome: Result<TrustScoreResult, VouchError>) -> Self {
        match outcome {
            Ok(result) => VerificationResponse::Verified(result),
            Err(VouchError::InvalidInput(_)) => VerificationResponse::Rejected {
                error: "Invalid input".to_string(),
            },
            Err(other) => VerificationResponse::Rejected {
                error: other.to_string(),
            },
        }
    }
}
