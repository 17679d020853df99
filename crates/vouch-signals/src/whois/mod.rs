// crates/vouch-signals/src/whois/mod.rs
//
// WHOIS signal: domain age in whole days.
//
// The lookup walks IANA -> registry -> registrar referrals over plain TCP
// (RFC 3912), then searches an explicit, prioritized list of creation-date
// field names because registrar schemas disagree. Failures and unparseable
// answers yield `None`, which is cached like any other value so that
// rate-limited or privacy-protected registrars are not hammered.

mod client;
mod record;

use async_trait::async_trait;
use chrono::Utc;

use vouch_core::identifier::DomainIdentifier;
use vouch_core::signal::DomainAgeSignal;
use vouch_core::traits::SignalCollector;

pub use client::{WhoisClient, WhoisConfig};
pub use record::{age_in_days, parse_date, WhoisRecord, CREATION_DATE_FIELDS};

/// Resolves a domain's registration age via WHOIS.
#[derive(Debug, Clone)]
pub struct WhoisCollector {
    client: WhoisClient,
}

impl WhoisCollector {
    pub fn new(config: &WhoisConfig) -> Self {
        Self {
            client: WhoisClient::new(config),
        }
    }

    pub fn client(&self) -> &WhoisClient {
        &self.client
    }
}

#[async_trait]
impl SignalCollector for WhoisCollector {
    type Signal = DomainAgeSignal;

    fn namespace(&self) -> &'static str {
        "whois"
    }

    async fn collect(&self, domain: &DomainIdentifier) -> DomainAgeSignal {
        let record = match self.client.lookup(domain.as_str()).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(domain = %domain, error = %e, "WHOIS lookup failed");
                return None;
            }
        };

        match record.creation_date() {
            Some(created) => Some(age_in_days(created, Utc::now())),
            None => {
                tracing::debug!(domain = %domain, "WHOIS answer has no parseable creation date");
                None
            }
        }
    }
}
