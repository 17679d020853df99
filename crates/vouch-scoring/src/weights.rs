// crates/vouch-scoring/src/weights.rs
//
// Additive score adjustments. Every adjustment is non-negative, which makes
// the score monotone in each signal.

/// Neutral starting point before any evidence is applied.
pub const BASE_SCORE: i32 = 50;

pub const HAS_A_RECORD: i32 = 10;
pub const HAS_MX_RECORD: i32 = 15;

/// Website answered with a status in `[200, 400)`.
pub const WEBSITE_OK: i32 = 15;
/// Title longer than `MIN_TITLE_LEN` characters.
pub const WEBSITE_TITLE: i32 = 5;
pub const MIN_TITLE_LEN: usize = 4;
pub const WEBSITE_CONTACT: i32 = 5;
pub const WEBSITE_CAREERS: i32 = 5;

/// Older than `ONE_YEAR_DAYS`.
pub const AGE_OVER_ONE_YEAR: i32 = 10;
pub const ONE_YEAR_DAYS: i64 = 365;
/// Older than `TEN_YEARS_DAYS`; stacks with `AGE_OVER_ONE_YEAR`.
pub const AGE_OVER_TEN_YEARS: i32 = 5;
pub const TEN_YEARS_DAYS: i64 = 3650;

/// A search hit linking a professional-network company or school page.
pub const CORROBORATION_PROFILE: i32 = 10;
/// A search snippet using official/company language.
pub const CORROBORATION_OFFICIAL: i32 = 5;

pub const PROFILE_LINK_MARKERS: &[&str] = &["linkedin.com/company", "linkedin.com/school"];
pub const OFFICIAL_SNIPPET_MARKERS: &[&str] = &["official", "company", "careers", "about"];

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;
