// crates/vouch-core/src/signal.rs
//
// Independently collected pieces of evidence about a domain.
//
// Every signal is either fully populated or an explicit negative value.
// Empty/false/null shapes are valid, cacheable results rather than errors.
// JSON field names are kept short since these documents are persisted in
// the signal cache and embedded in reports.

use serde::{Deserialize, Serialize};

/// A mail exchanger record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxRecord {
    /// Mail server hostname, without the trailing root dot.
    pub exchange: String,
    /// MX preference; lower is preferred.
    pub priority: u16,
}

/// Address and mail-exchange presence for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSignal {
    /// At least one A record resolved.
    #[serde(rename = "a")]
    pub has_a: bool,
    /// Resolved IPv4 addresses.
    #[serde(default)]
    pub a_records: Vec<String>,
    /// At least one MX record resolved.
    #[serde(rename = "mx")]
    pub has_mx: bool,
    #[serde(default)]
    pub mx_records: Vec<MxRecord>,
}

/// Homepage reachability and content heuristics.
///
/// `None` fields mean the site was unreachable over both HTTPS and HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteSignal {
    /// Final URL after redirects.
    pub url: Option<String>,
    #[serde(rename = "status")]
    pub http_status: Option<u16>,
    /// First `<title>` of the page, trimmed.
    #[serde(rename = "title")]
    pub page_title: Option<String>,
    #[serde(rename = "has_contact")]
    pub has_contact_page: bool,
    #[serde(rename = "has_careers")]
    pub has_careers_page: bool,
    /// Value of the `Server` response header.
    #[serde(rename = "server")]
    pub server_header: Option<String>,
}

impl WebsiteSignal {
    /// The all-null shape recorded when neither scheme answered.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Whether any HTTP response was received.
    pub fn is_reachable(&self) -> bool {
        self.http_status.is_some()
    }
}

/// Whole days since registration, or `None` when WHOIS gave no usable date.
///
/// `None` is distinct from `Some(0)` (a domain registered today).
pub type DomainAgeSignal = Option<i64>;

/// One external search result used as corroborating evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}
