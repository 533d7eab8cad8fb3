//! negscan scan engine
//!
//! Plays the framework role around the discovery core: crawl the target for
//! seed requests, feed every known resource through the discovery engine
//! (newly discovered ones included), then render the report. Discovery only
//! makes sense once a crawl has supplied at least one seed, which is why the
//! crawl phase always runs first.

use crate::core::context::Context;
use crate::core::rate_limit::RateLimiter;
use crate::http::client::HttpClient;
use crate::negotiation::{DiscoveryEngine, Verdict};
use crate::reporting::reporter::Reporter;
use crate::scanner::crawler::Crawler;
use crate::scanner::fuzzable::FuzzableRequest;
use reqwest::header::HeaderMap;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use url::Url;

pub struct Engine {
    ctx: Context,
}

impl Engine {
    pub fn new(ctx: Context) -> anyhow::Result<Self> {
        Ok(Self { ctx })
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        tracing::info!("Starting negscan against {}", self.ctx.target);
        tracing::info!(
            "Rate limit: {} req/sec, {} workers",
            self.ctx.rate_limit,
            self.ctx.negotiation.threads
        );

        let limiter = RateLimiter::new(self.ctx.rate_limit);
        let client = if self.ctx.cookies.is_some() || !self.ctx.headers.is_empty() {
            tracing::info!("Using authenticated session");
            HttpClient::with_auth(
                self.ctx.scope.clone(),
                limiter,
                self.ctx.timeout,
                self.ctx.cookies.clone(),
                self.ctx.headers.clone(),
            )?
        } else {
            HttpClient::new(self.ctx.scope.clone(), limiter, self.ctx.timeout)?
        };
        let client = Arc::new(client);

        let target_url = Url::parse(&self.ctx.target)?;

        // Baseline request; an unreachable target is fatal, nothing later is.
        let baseline = client.get(&target_url, &HeaderMap::new()).await?;
        tracing::info!(
            "Baseline: status={} time={}ms size={}",
            baseline.status,
            baseline.elapsed_ms,
            baseline.body.len()
        );

        // Seed crawl - the discovery engine needs known resources to chew on.
        let crawler = Crawler::new(self.ctx.crawl_depth);
        let seeds = crawler
            .crawl(&client, target_url.clone(), &self.ctx.scope)
            .await;
        tracing::info!("Crawl produced {} seed requests", seeds.len());

        let kb = Arc::new(Reporter::new());
        let discovery = DiscoveryEngine::new(
            Arc::clone(&client),
            self.ctx.scope.clone(),
            Arc::clone(&kb),
            self.ctx.negotiation.clone(),
        );

        // Feed seeds through discovery; anything discovered goes back into
        // the queue so its own siblings and directories get covered too.
        // Exact dedup here is fine - this set is tiny next to the probe
        // space the bloom filters guard.
        let mut pending: VecDeque<FuzzableRequest> = seeds.into();
        if pending.is_empty() {
            pending.push_back(FuzzableRequest::new(target_url));
        }
        let mut processed: HashSet<String> = HashSet::new();
        let mut discovered_total = 0usize;

        while let Some(request) = pending.pop_front() {
            if !processed.insert(request.url.as_str().to_string()) {
                continue;
            }

            if self.ctx.verbose {
                tracing::debug!("processing {}", request.url);
            }

            for discovered in discovery.on_request(&request).await {
                discovered_total += 1;
                pending.push_back(discovered);
            }
        }

        match discovery.verdict() {
            Verdict::Enabled => {
                tracing::info!("Scan complete: {} resources discovered", discovered_total)
            }
            Verdict::Disabled => {
                tracing::info!("Scan complete: target does not negotiate content")
            }
            Verdict::Unknown => tracing::info!(
                "Scan complete: verdict still unknown (not enough probeable filenames)"
            ),
        }

        self.render_report(&kb)?;
        Ok(())
    }

    fn render_report(&self, kb: &Reporter) -> anyhow::Result<()> {
        let findings = kb.findings();

        let rendered = match self.ctx.output_format.as_str() {
            "json" => crate::reporting::json::render(&findings)?,
            _ => crate::reporting::text::render(&findings),
        };

        if let Some(ref output_file) = self.ctx.output_file {
            std::fs::write(output_file, &rendered)?;
            tracing::info!("Report saved to {}", output_file);
        } else if !self.ctx.quiet {
            println!("{}", rendered);
        }

        Ok(())
    }
}
