// crates/vouch-scoring/src/scorer.rs
//
// Signal scoring for the Vouch engine.
//
// Starts from a neutral base, applies order-independent additive adjustments
// for each piece of positive evidence, clamps to [0, 100], and derives the
// verdict from fixed thresholds.

use vouch_core::result::Verdict;
use vouch_core::signal::{DnsSignal, DomainAgeSignal, SearchHit, WebsiteSignal};

use crate::weights::*;

/// Borrowed view of everything the scorer looks at.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub dns: &'a DnsSignal,
    pub website: &'a WebsiteSignal,
    pub domain_age_days: DomainAgeSignal,
    /// External search results; `None` when no corroboration source ran.
    pub corroboration: Option<&'a [SearchHit]>,
}

/// Score, verdict, and audit line for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u8,
    pub verdict: Verdict,
    pub explanation: String,
}

/// Score a set of signals.
///
/// # Adjustments (all additive, applied to a base of 50)
/// - DNS: A record +10, MX record +15.
/// - Website: status in `[200, 400)` +15, title longer than 4 chars +5,
///   contact info +5, careers info +5.
/// - WHOIS: older than 365 days +10, older than 3650 days a further +5.
/// - Corroboration: professional-network company page +10, official/company
///   language in a snippet +5.
pub fn score_signals(inputs: &ScoreInputs<'_>) -> ScoreCard {
    let raw = BASE_SCORE
        + dns_points(inputs.dns)
        + website_points(inputs.website)
        + age_points(inputs.domain_age_days)
        + corroboration_points(inputs.corroboration);

    let score = raw.clamp(MIN_SCORE, MAX_SCORE) as u8;
    let verdict = Verdict::from_score(score);
    let explanation = explain(score, verdict, inputs);

    ScoreCard {
        score,
        verdict,
        explanation,
    }
}

fn dns_points(dns: &DnsSignal) -> i32 {
    let mut points = 0;
    if dns.has_a {
        points += HAS_A_RECORD;
    }
    if dns.has_mx {
        points += HAS_MX_RECORD;
    }
    points
}

fn website_points(web: &WebsiteSignal) -> i32 {
    let mut points = 0;
    if web.http_status.is_some_and(|s| (200..400).contains(&s)) {
        points += WEBSITE_OK;
    }
    if web
        .page_title
        .as_deref()
        .is_some_and(|t| t.chars().count() > MIN_TITLE_LEN)
    {
        points += WEBSITE_TITLE;
    }
    if web.has_contact_page {
        points += WEBSITE_CONTACT;
    }
    if web.has_careers_page {
        points += WEBSITE_CAREERS;
    }
    points
}

fn age_points(age: DomainAgeSignal) -> i32 {
    match age {
        Some(days) if days > TEN_YEARS_DAYS => AGE_OVER_ONE_YEAR + AGE_OVER_TEN_YEARS,
        Some(days) if days > ONE_YEAR_DAYS => AGE_OVER_ONE_YEAR,
        _ => 0,
    }
}

fn corroboration_points(hits: Option<&[SearchHit]>) -> i32 {
    let Some(hits) = hits else {
        return 0;
    };

    let mut points = 0;
    if hits
        .iter()
        .any(|hit| PROFILE_LINK_MARKERS.iter().any(|m| hit.link.contains(m)))
    {
        points += CORROBORATION_PROFILE;
    }
    if hits.iter().any(|hit| {
        let snippet = hit.snippet.to_lowercase();
        OFFICIAL_SNIPPET_MARKERS.iter().any(|m| snippet.contains(m))
    }) {
        points += CORROBORATION_OFFICIAL;
    }
    points
}

/// Human-readable audit line. Not a machine-parseable breakdown.
fn explain(score: u8, verdict: Verdict, inputs: &ScoreInputs<'_>) -> String {
    let dns = match (inputs.dns.has_a, inputs.dns.has_mx) {
        (true, true) => "A and MX records",
        (true, false) => "A record, no MX",
        (false, true) => "MX record, no A",
        (false, false) => "no records",
    };

    let website = match inputs.website.http_status {
        Some(status) => format!("HTTP {}", status),
        None => "unreachable".to_string(),
    };

    let whois = match inputs.domain_age_days {
        Some(days) => format!("{} days old", days),
        None => "age unknown".to_string(),
    };

    let corroboration = match inputs.corroboration {
        Some(hits) if !hits.is_empty() => format!(", plus {} external search results", hits.len()),
        _ => String::new(),
    };

    format!(
        "Score {} ({}) computed from DNS ({}), website ({}) and WHOIS ({}) signals{}.",
        score, verdict, dns, website, whois, corroboration
    )
}
