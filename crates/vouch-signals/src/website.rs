// crates/vouch-signals/src/website.rs
//
// Website signal: homepage reachability and content heuristics.
//
// Tries `https://{domain}` and falls back to `http://{domain}` when the first
// attempt fails at the transport level (timeout, TLS, refused). Any HTTP
// response, 4xx and 5xx included, counts as reachable. If both attempts fail
// the all-null signal is returned; that is evidence, not an error.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::header::SERVER;
use serde::{Deserialize, Serialize};

use vouch_core::error::VouchError;
use vouch_core::identifier::DomainIdentifier;
use vouch_core::signal::WebsiteSignal;
use vouch_core::traits::SignalCollector;

/// Keywords suggesting the site publishes contact details.
const CONTACT_MARKERS: &[&str] = &["contact"];

/// Keywords suggesting the site advertises open positions.
const CAREERS_MARKERS: &[&str] = &["careers", "jobs", "join us"];

/// Bytes of a homepage body that are downloaded and inspected.
const MAX_BODY_BYTES: usize = 512 * 1024;

/// Outbound HTTP settings for homepage fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteConfig {
    /// Per-attempt timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum redirects followed before the attempt is abandoned.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    7
}

fn default_max_redirects() -> usize {
    3
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; ScamChecker/1.0)".to_string()
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

/// Facts extracted from a homepage body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFacts {
    pub title: Option<String>,
    pub has_contact: bool,
    pub has_careers: bool,
}

/// Fetches a domain's homepage and derives a `WebsiteSignal`.
#[derive(Debug, Clone)]
pub struct WebsiteCollector {
    client: reqwest::Client,
    title_pattern: Regex,
}

impl WebsiteCollector {
    pub fn new(config: &WebsiteConfig) -> Result<Self, VouchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| VouchError::Http(format!("Failed to build HTTP client: {}", e)))?;

        let title_pattern = Regex::new(r"(?i)<title[^>]*>([^<]+)</title>")
            .map_err(|e| VouchError::Config(format!("Invalid title pattern: {}", e)))?;

        Ok(Self {
            client,
            title_pattern,
        })
    }

    /// Probe `host` (a domain, optionally with `:port`) over HTTPS, then HTTP.
    pub async fn fetch(&self, host: &str) -> WebsiteSignal {
        for scheme in ["https", "http"] {
            let url = format!("{}://{}", scheme, host);
            match self.client.get(&url).send().await {
                Ok(response) => return self.inspect(response).await,
                Err(e) => {
                    tracing::debug!(url = %url, error = %e, "homepage fetch failed");
                }
            }
        }

        tracing::debug!(host, "homepage unreachable over https and http");
        WebsiteSignal::unreachable()
    }

    async fn inspect(&self, response: reqwest::Response) -> WebsiteSignal {
        let url = response.url().to_string();
        let status = response.status().as_u16();
        let server = response
            .headers()
            .get(SERVER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let html = read_capped(response, MAX_BODY_BYTES).await;
        let facts = self.page_facts(&html);

        WebsiteSignal {
            url: Some(url),
            http_status: Some(status),
            page_title: facts.title,
            has_contact_page: facts.has_contact,
            has_careers_page: facts.has_careers,
            server_header: server,
        }
    }

    /// First non-blank `<title>` plus case-insensitive keyword heuristics.
    pub fn page_facts(&self, html: &str) -> PageFacts {
        let title = self
            .title_pattern
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty());

        let lower = html.to_lowercase();
        let mentions = |markers: &[&str]| markers.iter().any(|m| lower.contains(m));

        PageFacts {
            title,
            has_contact: mentions(CONTACT_MARKERS),
            has_careers: mentions(CAREERS_MARKERS),
        }
    }
}

/// Read at most `limit` bytes of the body. A body that fails mid-read is
/// treated as empty.
async fn read_capped(mut response: reqwest::Response, limit: usize) -> String {
    let mut body = Vec::new();
    while body.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "homepage body read failed");
                body.clear();
                break;
            }
        }
    }
    body.truncate(limit);
    String::from_utf8_lossy(&body).into_owned()
}

#[async_trait]
impl SignalCollector for WebsiteCollector {
    type Signal = WebsiteSignal;

    fn namespace(&self) -> &'static str {
        "web"
    }

    async fn collect(&self, domain: &DomainIdentifier) -> WebsiteSignal {
        self.fetch(domain.as_str()).await
    }
}
