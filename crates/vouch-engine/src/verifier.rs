// crates/vouch-engine/src/verifier.rs
//
// Verifier: per-request orchestration.
//
//   1. Normalize the identifier; reject with `InvalidInput` if impossible.
//   2. Serve `verify:<domain>` from cache when present, verbatim.
//   3. Otherwise re-collect every signal concurrently and wait for all of
//      them. Warm `dns:`/`web:`/`whois:` entries are overwritten, not read,
//      so a composite expiry always means fresh evidence. Each collector is
//      bounded by its own I/O timeout; there is no overall deadline.
//   4. Score, cache the composite document, return it.
//
// No state survives a request except what is written to the shared cache.

use std::sync::Arc;
use std::time::Duration;

use vouch_core::error::VouchError;
use vouch_core::identifier::DomainIdentifier;
use vouch_core::result::TrustScoreResult;
use vouch_core::signal::{DnsSignal, DomainAgeSignal, SearchHit, WebsiteSignal};
use vouch_core::traits::{CacheBackend, SignalCollector};
use vouch_scoring::{score_signals, ScoreInputs};
use vouch_signals::{DnsCollector, WebsiteCollector, WhoisCollector};
use vouch_store::{cache_key, Cached, SignalCache};

use crate::config::EngineConfig;
use crate::response::VerificationResponse;

/// Cache namespace for composite results: `verify:<domain>`.
pub const COMPOSITE_NAMESPACE: &str = "verify";

/// A type-erased collector behind its memoizing decorator.
type Source<S> = Arc<Cached<Box<dyn SignalCollector<Signal = S>>>>;

fn memoized<C>(collector: C, cache: &SignalCache, ttl: Duration) -> Source<C::Signal>
where
    C: SignalCollector + 'static,
{
    let boxed: Box<dyn SignalCollector<Signal = C::Signal>> = Box::new(collector);
    Arc::new(Cached::new(boxed, cache.clone(), ttl))
}

/// The verification orchestrator. Cheap to clone; clones share collectors
/// and cache.
#[derive(Clone)]
pub struct Verifier {
    dns: Source<DnsSignal>,
    website: Source<WebsiteSignal>,
    whois: Source<DomainAgeSignal>,
    corroboration: Option<Source<Vec<SearchHit>>>,
    cache: SignalCache,
    signal_ttl: Duration,
    composite_ttl: Duration,
}

impl Verifier {
    /// Wire the network collectors described by `config` over `backend`.
    pub fn from_config(
        config: &EngineConfig,
        backend: Arc<dyn CacheBackend>,
    ) -> Result<Self, VouchError> {
        Ok(Self::with_collectors(
            DnsCollector::new(&config.dns),
            WebsiteCollector::new(&config.website)?,
            WhoisCollector::new(&config.whois),
            SignalCache::new(backend),
            config.cache.signal_ttl(),
            config.cache.composite_ttl(),
        ))
    }

    /// Build a verifier from arbitrary collectors. Each one is wrapped in a
    /// `Cached` decorator with `signal_ttl`.
    pub fn with_collectors<D, W, H>(
        dns: D,
        website: W,
        whois: H,
        cache: SignalCache,
        signal_ttl: Duration,
        composite_ttl: Duration,
    ) -> Self
    where
        D: SignalCollector<Signal = DnsSignal> + 'static,
        W: SignalCollector<Signal = WebsiteSignal> + 'static,
        H: SignalCollector<Signal = DomainAgeSignal> + 'static,
    {
        Self {
            dns: memoized(dns, &cache, signal_ttl),
            website: memoized(website, &cache, signal_ttl),
            whois: memoized(whois, &cache, signal_ttl),
            corroboration: None,
            cache,
            signal_ttl,
            composite_ttl,
        }
    }

    /// Add an external corroboration source (e.g. a web search for the
    /// company's professional-network page). Memoized like the others.
    pub fn with_corroboration<C>(mut self, source: C) -> Self
    where
        C: SignalCollector<Signal = Vec<SearchHit>> + 'static,
    {
        self.corroboration = Some(memoized(source, &self.cache, self.signal_ttl));
        self
    }

    /// Verify one free-form identifier.
    ///
    /// The only error is `VouchError::InvalidInput`; every network and cache
    /// failure degrades into the signals themselves.
    pub async fn verify(&self, input: &str) -> Result<TrustScoreResult, VouchError> {
        let domain = DomainIdentifier::parse(input)
            .ok_or_else(|| VouchError::InvalidInput(input.trim().to_string()))?;

        let key = cache_key(COMPOSITE_NAMESPACE, &domain);
        if let Some(cached) = self.cache.get::<TrustScoreResult>(&key).await {
            tracing::debug!(domain = %domain, "composite cache hit");
            return Ok(cached);
        }

        let corroborate = async {
            match &self.corroboration {
                Some(source) => Some(source.refresh(&domain).await),
                None => None,
            }
        };

        let (dns, website, domain_age_days, corroboration) = tokio::join!(
            self.dns.refresh(&domain),
            self.website.refresh(&domain),
            self.whois.refresh(&domain),
            corroborate,
        );

        let card = score_signals(&ScoreInputs {
            dns: &dns,
            website: &website,
            domain_age_days,
            corroboration: corroboration.as_deref(),
        });

        tracing::info!(
            domain = %domain,
            score = card.score,
            verdict = %card.verdict,
            "verification complete"
        );

        let result = TrustScoreResult {
            domain,
            dns,
            website,
            domain_age_days,
            score: card.score,
            verdict: card.verdict,
            explanation: card.explanation,
            corroboration,
        };

        self.cache.set(&key, &result, self.composite_ttl).await;
        Ok(result)
    }

    /// Verify and shape the outcome for a JSON response body.
    pub async fn respond(&self, input: &str) -> VerificationResponse {
        self.verify(input).await.into()
    }
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("corroboration", &self.corroboration.is_some())
            .field("signal_ttl", &self.signal_ttl)
            .field("composite_ttl", &self.composite_ttl)
            .finish_non_exhaustive()
    }
}
