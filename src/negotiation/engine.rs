//! Per-request orchestration: verify once, then discover and bruteforce

use crate::core::bloom::SeenSet;
use crate::core::scope::Scope;
use crate::http::client::HttpClient;
use crate::negotiation::bruteforce::BruteforceCoordinator;
use crate::negotiation::discover::ResourceDiscoverer;
use crate::negotiation::probe::NegotiationProber;
use crate::negotiation::verdict::{Verdict, VerdictCell};
use crate::negotiation::{NegotiationConfig, PLUGIN_NAME};
use crate::reporting::model::Finding;
use crate::reporting::reporter::Reporter;
use crate::scanner::fuzzable::FuzzableRequest;
use crate::scanner::urlext;
use std::sync::Arc;

/// The discovery entry point the scan loop feeds requests into.
///
/// Holds the only mutable state of the whole technique: the verdict cell,
/// the two seen-set namespaces, and the bruteforce queue. Everything else is
/// stateless plumbing, so one instance serves a whole scan.
pub struct DiscoveryEngine {
    verdict: VerdictCell,
    prober: Arc<NegotiationProber>,
    seen_resources: Arc<SeenSet>,
    discoverer: ResourceDiscoverer,
    bruteforcer: BruteforceCoordinator,
    kb: Arc<Reporter>,
}

impl DiscoveryEngine {
    pub fn new(
        client: Arc<HttpClient>,
        scope: Scope,
        kb: Arc<Reporter>,
        config: NegotiationConfig,
    ) -> Self {
        let prober = Arc::new(NegotiationProber::new(Arc::clone(&client)));
        let seen_resources = Arc::new(SeenSet::new(config.seen_capacity, config.seen_fp_rate));
        let seen_dirs = Arc::new(SeenSet::new(config.seen_capacity, config.seen_fp_rate));

        let discoverer = ResourceDiscoverer::new(
            Arc::clone(&client),
            Arc::clone(&prober),
            Arc::clone(&seen_resources),
            scope.clone(),
            Arc::clone(&kb),
        );
        let bruteforcer = BruteforceCoordinator::new(
            client,
            Arc::clone(&prober),
            seen_dirs,
            scope,
            Arc::clone(&kb),
            config.wordlist,
            config.threads,
        );

        Self {
            verdict: VerdictCell::new(config.retries),
            prober,
            seen_resources,
            discoverer,
            bruteforcer,
            kb,
        }
    }

    /// Process one known resource; returns whatever new resources the
    /// technique surfaced for it.
    pub async fn on_request(&self, request: &FuzzableRequest) -> Vec<FuzzableRequest> {
        // Scan-wide fast path: a settled negative costs nothing per request.
        if self.verdict.current() == Verdict::Disabled {
            return Vec::new();
        }

        match self.check(request).await {
            Verdict::Unknown => {
                // Can't tell yet. Bank the directory so a later confirmation
                // still benefits from this request.
                self.bruteforcer.enqueue(&request.url);
                Vec::new()
            }
            Verdict::Enabled => {
                let mut result = self.discoverer.discover(request).await;
                self.bruteforcer.enqueue(&request.url);
                result.extend(self.bruteforcer.bruteforce().await);
                result
            }
            Verdict::Disabled => Vec::new(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict.current()
    }

    /// Resolve the verdict using this request, if it can contribute: a URL
    /// without a filename has no stem to probe and leaves both the verdict
    /// and the retry budget untouched.
    async fn check(&self, request: &FuzzableRequest) -> Verdict {
        let current = self.verdict.current();
        if current != Verdict::Unknown {
            return current;
        }

        let Some(sibling) = urlext::stem_sibling(&request.url) else {
            return Verdict::Unknown;
        };

        // At most one probe per stem for the whole scan.
        if !self.seen_resources.check_and_insert(sibling.as_str()) {
            return self.verdict.current();
        }

        let outcome = match self.prober.probe(&sibling, &request.headers).await {
            Ok(outcome) => outcome,
            Err(err) => {
                // No evidence either way; keep the budget intact.
                tracing::debug!("verification probe failed for {}: {}", sibling, err);
                return self.verdict.current();
            }
        };

        if outcome.alternates.is_empty() {
            tracing::info!(
                "no negotiation on {} ({} tries left)",
                sibling,
                self.verdict.tries_left().saturating_sub(1)
            );
            return self.verdict.note_inconclusive();
        }

        tracing::info!("HTTP content negotiation enabled on {}", sibling);
        self.kb.record(
            PLUGIN_NAME,
            "info",
            Finding::negotiation_enabled(sibling.as_str(), outcome.response.id),
        );
        self.verdict.note_enabled()
    }
}
