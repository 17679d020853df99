// crates/vouch-cli/src/output.rs
//
// Output formatting utilities for the vouch CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use vouch_core::TrustScoreResult;

/// One labelled line of a report table.
#[derive(Debug, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "Signal")]
    pub signal: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl ReportRow {
    pub fn new(signal: &str, value: impl Into<String>) -> Self {
        Self {
            signal: signal.to_string(),
            value: value.into(),
        }
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Flatten a verification result into table rows.
pub fn report_rows(result: &TrustScoreResult) -> Vec<ReportRow> {
    let dns = &result.dns;
    let web = &result.website;

    let a_value = if dns.has_a {
        dns.a_records.join(", ")
    } else {
        "none".to_string()
    };
    let mx_value = if dns.has_mx {
        dns.mx_records
            .iter()
            .map(|mx| format!("{} ({})", mx.exchange, mx.priority))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        "none".to_string()
    };
    let status = match web.http_status {
        Some(code) => code.to_string(),
        None => "unreachable".to_string(),
    };
    let age = match result.domain_age_days {
        Some(days) => format!("{} days", days),
        None => "unknown".to_string(),
    };

    let mut rows = vec![
        ReportRow::new("Domain", result.domain.as_str()),
        ReportRow::new("A records", a_value),
        ReportRow::new("MX records", mx_value),
        ReportRow::new("HTTP status", status),
        ReportRow::new("Final URL", or_dash(web.url.as_deref())),
        ReportRow::new("Title", or_dash(web.page_title.as_deref())),
        ReportRow::new("Server", or_dash(web.server_header.as_deref())),
        ReportRow::new("Contact page", yes_no(web.has_contact_page)),
        ReportRow::new("Careers page", yes_no(web.has_careers_page)),
        ReportRow::new("Domain age", age),
    ];
    if let Some(hits) = &result.corroboration {
        rows.push(ReportRow::new("Search results", hits.len().to_string()));
    }
    rows.push(ReportRow::new("Trust score", result.score.to_string()));
    rows.push(ReportRow::new("Verdict", result.verdict.as_str()));
    rows
}
