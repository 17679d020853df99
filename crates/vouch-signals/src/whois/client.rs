// crates/vouch-signals/src/whois/client.rs
//
// Minimal RFC 3912 WHOIS client: send `<domain>\r\n` over TCP, read until
// the server closes the connection.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use vouch_core::error::VouchError;

use super::record::WhoisRecord;

/// WHOIS lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoisConfig {
    /// First server queried; answers with a referral to the TLD registry.
    #[serde(default = "default_bootstrap_server")]
    pub bootstrap_server: String,
    /// Timeout for each individual query (connect + read), in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Referrals followed after the bootstrap query.
    #[serde(default = "default_max_referrals")]
    pub max_referrals: usize,
}

fn default_bootstrap_server() -> String {
    "whois.iana.org:43".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_referrals() -> usize {
    2
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            bootstrap_server: default_bootstrap_server(),
            timeout_secs: default_timeout_secs(),
            max_referrals: default_max_referrals(),
        }
    }
}

/// WHOIS client following registry and registrar referrals.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    bootstrap_server: String,
    timeout: Duration,
    max_referrals: usize,
}

impl WhoisClient {
    pub fn new(config: &WhoisConfig) -> Self {
        Self {
            bootstrap_server: server_address(&config.bootstrap_server),
            timeout: Duration::from_secs(config.timeout_secs),
            max_referrals: config.max_referrals,
        }
    }

    /// Resolve the most specific WHOIS record reachable for `domain`.
    ///
    /// The bootstrap answer is only used for its referral and is never
    /// returned: it describes the TLD, not the domain. A bootstrap answer
    /// with no referral (a TLD without public WHOIS) is a lookup error. The
    /// registry answer is used unless it lacks a creation date and names a
    /// registrar WHOIS server, in which case that server is asked too. A
    /// failing registrar query keeps the registry answer.
    pub async fn lookup(&self, domain: &str) -> Result<WhoisRecord, VouchError> {
        let mut server = self.bootstrap_server.clone();
        let mut record = WhoisRecord::parse(&self.query(&server, domain).await?);
        let mut from_bootstrap = true;

        for _ in 0..self.max_referrals {
            let next = if from_bootstrap {
                record.referral()
            } else if record.creation_date().is_none() {
                record.registrar_referral()
            } else {
                None
            };
            let Some(next) = next.map(|s| server_address(&s)) else {
                break;
            };
            if next == server {
                break;
            }

            match self.query(&next, domain).await {
                Ok(text) => {
                    tracing::debug!(domain, server = %next, "following WHOIS referral");
                    record = WhoisRecord::parse(&text);
                    server = next;
                    from_bootstrap = false;
                }
                Err(e) if !from_bootstrap => {
                    tracing::debug!(domain, server = %next, error = %e, "registrar WHOIS failed, keeping registry answer");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        if from_bootstrap {
            return Err(VouchError::Lookup(match record.referral() {
                Some(_) => format!("WHOIS referral for {} was not followed", domain),
                None => format!("no registry WHOIS server for {}", domain),
            }));
        }

        Ok(record)
    }

    /// Send one query to `server` (`host:port`) and return the raw answer.
    pub async fn query(&self, server: &str, domain: &str) -> Result<String, VouchError> {
        let exchange = async {
            let mut stream = TcpStream::connect(server).await?;
            stream.write_all(format!("{}\r\n", domain).as_bytes()).await?;
            let mut buf = Vec::new();
            stream.read_to_end(&mut buf).await?;
            Ok::<_, std::io::Error>(buf)
        };

        let bytes = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| VouchError::Lookup(format!("WHOIS query to {} timed out", server)))?
            .map_err(|e| VouchError::Lookup(format!("WHOIS query to {} failed: {}", server, e)))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Normalize a referral target into `host:port`, defaulting to port 43.
fn server_address(raw: &str) -> String {
    let host = raw
        .trim()
        .trim_start_matches("rwhois://")
        .trim_start_matches("whois://")
        .trim_end_matches('/');
    if host.contains(':') {
        host.to_string()
    } else {
        format!("{}:43", host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    /// Serve one canned answer and report the query line received.
    async fn mock_server(answer: String) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 512];
            let n = stream.read(&mut buf).await.unwrap();
            stream.write_all(answer.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&buf[..n]).into_owned()
        });
        (addr, handle)
    }

    fn client(bootstrap: &str, max_referrals: usize) -> WhoisClient {
        WhoisClient::new(&WhoisConfig {
            bootstrap_server: bootstrap.to_string(),
            timeout_secs: 2,
            max_referrals,
        })
    }

    #[test]
    fn server_address_defaults_port() {
        assert_eq!(server_address("whois.verisign-grs.com"), "whois.verisign-grs.com:43");
        assert_eq!(server_address("whois://whois.nic.io/"), "whois.nic.io:43");
        assert_eq!(server_address("127.0.0.1:4343"), "127.0.0.1:4343");
    }

    #[tokio::test]
    async fn query_sends_crlf_terminated_domain() {
        let (addr, handle) = mock_server("Domain Name: EXAMPLE.COM\r\n".to_string()).await;
        let text = client(&addr, 0).query(&addr, "example.com").await.unwrap();
        assert_eq!(handle.await.unwrap(), "example.com\r\n");
        assert!(text.contains("EXAMPLE.COM"));
    }

    #[tokio::test]
    async fn follows_registry_referral() {
        let (registry, registry_handle) =
            mock_server("Domain Name: EXAMPLE.COM\r\nCreation Date: 1995-08-14T04:00:00Z\r\n".to_string()).await;
        let (iana, iana_handle) = mock_server(format!(
            "% IANA WHOIS server\r\n\r\nrefer:        {}\r\n\r\ndomain:       COM\r\ncreated:      1985-01-01\r\n",
            registry
        ))
        .await;

        let record = client(&iana, 2).lookup("example.com").await.unwrap();
        iana_handle.await.unwrap();
        registry_handle.await.unwrap();

        let created = record.creation_date().unwrap();
        assert_eq!(created.to_rfc3339(), "1995-08-14T04:00:00+00:00");
    }

    #[tokio::test]
    async fn unfollowed_referral_is_an_error() {
        let (iana, handle) =
            mock_server("refer: whois.example-registry.test\r\ncreated: 1985-01-01\r\n".to_string()).await;
        let result = client(&iana, 0).lookup("example.com").await;
        handle.await.unwrap();
        assert!(matches!(result, Err(VouchError::Lookup(_))));
    }

    #[tokio::test]
    async fn tld_without_registry_is_an_error() {
        let (iana, handle) = mock_server(
            "% IANA WHOIS server\r\n\r\ndomain:       ES\r\ncreated:      1988-04-14\r\n".to_string(),
        )
        .await;
        let result = client(&iana, 2).lookup("brand-new-scam.es").await;
        handle.await.unwrap();
        assert!(matches!(result, Err(VouchError::Lookup(msg)) if msg.contains("no registry")));
    }

    #[tokio::test]
    async fn timeout_is_a_lookup_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(3)).await;
            drop(stream);
        });

        let c = WhoisClient {
            bootstrap_server: addr.clone(),
            timeout: Duration::from_millis(200),
            max_referrals: 0,
        };
        let result = c.query(&addr, "slow.test").await;
        assert!(matches!(result, Err(VouchError::Lookup(msg)) if msg.contains("timed out")));
        handle.abort();
    }
}
