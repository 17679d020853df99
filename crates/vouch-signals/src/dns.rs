// crates/vouch-signals/src/dns.rs
//
// DNS signal: A and MX presence.
//
// Both record types are resolved independently; a failure of one (NXDOMAIN,
// no records, timeout) is recorded as false/empty for that type only. There
// is no retry beyond the resolver's own attempts.

use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use serde::{Deserialize, Serialize};

use vouch_core::identifier::DomainIdentifier;
use vouch_core::signal::{DnsSignal, MxRecord};
use vouch_core::traits::SignalCollector;

/// Resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsConfig {
    /// Per-query timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Resolver attempts per query.
    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_attempts() -> usize {
    2
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            attempts: default_attempts(),
        }
    }
}

/// Collects A and MX records through a Tokio resolver.
pub struct DnsCollector {
    resolver: TokioAsyncResolver,
}

impl DnsCollector {
    /// Build a resolver from the system configuration, falling back to the
    /// library's default upstreams when it cannot be read.
    pub fn new(config: &DnsConfig) -> Self {
        let (resolver_config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                tracing::warn!("Could not read system resolver config: {}. Using defaults.", e);
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        opts.timeout = Duration::from_secs(config.timeout_secs);
        opts.attempts = config.attempts;

        Self {
            resolver: TokioAsyncResolver::tokio(resolver_config, opts),
        }
    }
}

#[async_trait]
impl SignalCollector for DnsCollector {
    type Signal = DnsSignal;

    fn namespace(&self) -> &'static str {
        "dns"
    }

    async fn collect(&self, domain: &DomainIdentifier) -> DnsSignal {
        // Fully qualified, so search domains from resolv.conf never apply.
        let fqdn = format!("{}.", domain);

        let (a, mx) = tokio::join!(
            self.resolver.ipv4_lookup(fqdn.as_str()),
            self.resolver.mx_lookup(fqdn.as_str()),
        );

        let a: Result<Vec<String>, String> = a
            .map(|lookup| lookup.iter().map(|addr| addr.to_string()).collect())
            .map_err(|e| e.to_string());
        let mx: Result<Vec<MxRecord>, String> = mx
            .map(|lookup| {
                lookup
                    .iter()
                    .map(|record| MxRecord {
                        exchange: record.exchange().to_utf8().trim_end_matches('.').to_string(),
                        priority: record.preference(),
                    })
                    .collect()
            })
            .map_err(|e| e.to_string());

        assemble(domain, a, mx)
    }
}

/// Fold the two lookup outcomes into a signal. Errors count as "no records".
fn assemble(
    domain: &DomainIdentifier,
    a: Result<Vec<String>, String>,
    mx: Result<Vec<MxRecord>, String>,
) -> DnsSignal {
    let a_records = a.unwrap_or_else(|e| {
        tracing::debug!(domain = %domain, error = %e, "no A records");
        Vec::new()
    });
    let mut mx_records = mx.unwrap_or_else(|e| {
        tracing::debug!(domain = %domain, error = %e, "no MX records");
        Vec::new()
    });
    mx_records.sort_by_key(|record| record.priority);

    DnsSignal {
        has_a: !a_records.is_empty(),
        a_records,
        has_mx: !mx_records.is_empty(),
        mx_records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> DomainIdentifier {
        DomainIdentifier::parse("example.com").unwrap()
    }

    fn mx(exchange: &str, priority: u16) -> MxRecord {
        MxRecord {
            exchange: exchange.to_string(),
            priority,
        }
    }

    #[test]
    fn both_present() {
        let signal = assemble(
            &domain(),
            Ok(vec!["93.184.216.34".to_string()]),
            Ok(vec![mx("mx2.example.com", 20), mx("mx1.example.com", 10)]),
        );
        assert!(signal.has_a);
        assert!(signal.has_mx);
        assert_eq!(signal.a_records, vec!["93.184.216.34"]);
        assert_eq!(signal.mx_records[0].exchange, "mx1.example.com");
    }

    #[test]
    fn mx_failure_does_not_affect_a() {
        let signal = assemble(
            &domain(),
            Ok(vec!["10.0.0.1".to_string()]),
            Err("no records found".to_string()),
        );
        assert!(signal.has_a);
        assert!(!signal.has_mx);
        assert!(signal.mx_records.is_empty());
    }

    #[test]
    fn nxdomain_is_all_negative() {
        let signal = assemble(
            &domain(),
            Err("NXDomain".to_string()),
            Err("NXDomain".to_string()),
        );
        assert_eq!(signal, DnsSignal::default());
    }

    #[test]
    fn empty_answer_counts_as_absent() {
        let signal = assemble(&domain(), Ok(vec![]), Ok(vec![]));
        assert!(!signal.has_a);
        assert!(!signal.has_mx);
    }
}
