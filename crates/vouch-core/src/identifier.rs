// crates/vouch-core/src/identifier.rs
//
// Identifier normalization: reduce an email address, URL, or bare host to a
// canonical domain. Pure and total; no I/O.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// A canonical domain: lowercase hostname, no scheme, no leading `www.`.
///
/// Only constructed through [`DomainIdentifier::parse`], so every value in
/// circulation has already been normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainIdentifier(String);

impl DomainIdentifier {
    /// Normalize a free-form identifier into a domain.
    ///
    /// Resolution order:
    /// 1. Email: everything after the first `@`, up to whitespace or `>,;`.
    /// 2. URL: the hostname, prefixing `https://` when no scheme is given.
    /// 3. Bare hostname: `label.label...tld` with an alphabetic TLD of 2+ chars.
    ///
    /// Returns `None` when none of these apply.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some(at) = input.find('@') {
            let host: String = input[at + 1..]
                .chars()
                .take_while(|c| !c.is_whitespace() && !matches!(c, '>' | ',' | ';'))
                .collect();
            if host.is_empty() {
                return None;
            }
            return Some(Self::canonical(&host));
        }

        let candidate = if input.contains("://") {
            input.to_string()
        } else {
            format!("https://{}", input)
        };
        if let Ok(url) = Url::parse(&candidate) {
            if let Some(host) = url.host_str().filter(|h| !h.is_empty()) {
                return Some(Self::canonical(host));
            }
        }

        if is_bare_hostname(input) {
            return Some(Self(input.to_lowercase()));
        }

        None
    }

    /// Borrow the canonical domain string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn canonical(host: &str) -> Self {
        let lower = host.to_lowercase();
        let stripped = lower.strip_prefix("www.").unwrap_or(&lower);
        Self(stripped.to_string())
    }
}

impl fmt::Display for DomainIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `[a-z0-9-]` labels separated by dots, ending in an alphabetic TLD.
fn is_bare_hostname(input: &str) -> bool {
    let labels: Vec<&str> = input.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    let labels_ok = rest.iter().all(|label| {
        !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    tld_ok && labels_ok
}
