// crates/vouch-core/src/result.rs
//
// The composite score document returned to callers.

use serde::{Deserialize, Serialize};

use crate::identifier::DomainIdentifier;
use crate::signal::{DnsSignal, DomainAgeSignal, SearchHit, WebsiteSignal};

/// Coarse categorical label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyReal,
    ProbablyReal,
    Suspicious,
    LikelyFake,
}

impl Verdict {
    /// Map a score to a verdict. Thresholds are strict and checked top-down:
    /// `> 80`, `> 60`, `> 40`, otherwise fake.
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            Verdict::LikelyReal
        } else if score > 60 {
            Verdict::ProbablyReal
        } else if score > 40 {
            Verdict::Suspicious
        } else {
            Verdict::LikelyFake
        }
    }

    /// The wire label, e.g. `likely_real`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::LikelyReal => "likely_real",
            Verdict::ProbablyReal => "probably_real",
            Verdict::Suspicious => "suspicious",
            Verdict::LikelyFake => "likely_fake",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final scored document combining all signals for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustScoreResult {
    pub domain: DomainIdentifier,
    pub dns: DnsSignal,
    pub website: WebsiteSignal,
    pub domain_age_days: DomainAgeSignal,
    /// Always within `[0, 100]`.
    #[serde(rename = "trust_score")]
    pub score: u8,
    pub verdict: Verdict,
    /// Human-readable audit line; not meant to be parsed.
    pub explanation: String,
    /// External search evidence, when a corroboration source is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corroboration: Option<Vec<SearchHit>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_boundaries() {
        assert_eq!(Verdict::from_score(100), Verdict::LikelyReal);
        assert_eq!(Verdict::from_score(81), Verdict::LikelyReal);
        assert_eq!(Verdict::from_score(80), Verdict::ProbablyReal);
        assert_eq!(Verdict::from_score(61), Verdict::ProbablyReal);
        assert_eq!(Verdict::from_score(60), Verdict::Suspicious);
        assert_eq!(Verdict::from_score(41), Verdict::Suspicious);
        assert_eq!(Verdict::from_score(40), Verdict::LikelyFake);
        assert_eq!(Verdict::from_score(0), Verdict::LikelyFake);
    }

    #[test]
    fn verdict_is_monotone_in_score() {
        let rank = |v: Verdict| match v {
            Verdict::LikelyFake => 0,
            Verdict::Suspicious => 1,
            Verdict::ProbablyReal => 2,
            Verdict::LikelyReal => 3,
        };
        for score in 0..100u8 {
            assert!(rank(Verdict::from_score(score)) <= rank(Verdict::from_score(score + 1)));
        }
    }

    #[test]
    fn verdict_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Verdict::ProbablyReal).unwrap(),
            "\"probably_real\""
        );
        assert_eq!(Verdict::LikelyFake.to_string(), "likely_fake");
    }
}
