// crates/vouch-scoring/src/lib.rs
//
// vouch-scoring: Trust scoring for the Vouch engine.
//
// A pure, total function from collected signals to a bounded score, verdict,
// and audit explanation. No I/O.

pub mod scorer;
pub mod weights;

pub use scorer::{score_signals, ScoreCard, ScoreInputs};
