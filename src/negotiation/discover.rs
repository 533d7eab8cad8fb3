//! Sibling resource discovery for a confirmed target

use crate::core::bloom::SeenSet;
use crate::core::scope::Scope;
use crate::http::client::HttpClient;
use crate::negotiation::probe::NegotiationProber;
use crate::negotiation::PLUGIN_NAME;
use crate::reporting::model::Finding;
use crate::reporting::reporter::Reporter;
use crate::scanner::fuzzable::{requests_from_response, FuzzableRequest};
use crate::scanner::urlext;
use reqwest::header::HeaderMap;
use std::sync::Arc;
use url::Url;

/// Expands one known resource into the siblings the server negotiates for
/// its stem. Only called once the verdict is `Enabled`.
pub struct ResourceDiscoverer {
    client: Arc<HttpClient>,
    prober: Arc<NegotiationProber>,
    seen_resources: Arc<SeenSet>,
    scope: Scope,
    kb: Arc<Reporter>,
}

impl ResourceDiscoverer {
    pub fn new(
        client: Arc<HttpClient>,
        prober: Arc<NegotiationProber>,
        seen_resources: Arc<SeenSet>,
        scope: Scope,
        kb: Arc<Reporter>,
    ) -> Self {
        Self {
            client,
            prober,
            seen_resources,
            scope,
            kb,
        }
    }

    /// From a request like `http://host/backup.php`, find files like
    /// `backup.zip` or `backup.old` via the stem probe, fetch each one, and
    /// convert the responses into new scannable requests.
    pub async fn discover(&self, request: &FuzzableRequest) -> Vec<FuzzableRequest> {
        let Some(sibling) = urlext::stem_sibling(&request.url) else {
            return Vec::new();
        };

        // One stem probe per scan; the verification pass may already have
        // claimed this one.
        if !self.seen_resources.check_and_insert(sibling.as_str()) {
            return Vec::new();
        }

        let alternates = match self.prober.probe(&sibling, &request.headers).await {
            Ok(outcome) => outcome.alternates,
            Err(err) => {
                tracing::debug!("stem probe failed for {}: {}", sibling, err);
                return Vec::new();
            }
        };

        fetch_alternates(&self.client, &request.url, &alternates, &self.scope, &self.kb).await
    }
}

/// Fetch each named alternate relative to `base`, record it as a discovery
/// finding, and convert the response into scannable requests.
///
/// One alternate failing — transport error, out of scope, non-2xx — drops
/// only that alternate; its siblings still go through.
pub(crate) async fn fetch_alternates(
    client: &HttpClient,
    base: &Url,
    alternates: &[String],
    scope: &Scope,
    kb: &Reporter,
) -> Vec<FuzzableRequest> {
    let mut result = Vec::new();

    for name in alternates {
        let full_url = match base.join(name) {
            Ok(url) => url,
            Err(err) => {
                tracing::debug!("skipping unjoinable alternate {:?}: {}", name, err);
                continue;
            }
        };

        match client.get(&full_url, &HeaderMap::new()).await {
            Ok(response) if response.is_success() => {
                tracing::info!("discovered {} ({} bytes)", full_url, response.body.len());
                kb.record(
                    PLUGIN_NAME,
                    "discovery",
                    Finding::discovered_resource(
                        full_url.as_str(),
                        response.id,
                        &response.body_hash,
                    ),
                );
                result.extend(requests_from_response(&full_url, &response, scope));
            }
            Ok(response) => {
                tracing::debug!("alternate {} returned {}", full_url, response.status);
            }
            Err(err) => {
                tracing::debug!("failed to fetch alternate {}: {}", full_url, err);
            }
        }
    }

    result
}
