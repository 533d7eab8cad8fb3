//! Breadth-first seed crawler
//!
//! The discovery engine needs known resources to work from; this crawler
//! supplies them by walking in-scope links from the target to a configured
//! depth. It is deliberately shallow — a seed source, not a full spider.

use crate::core::scope::Scope;
use crate::http::client::HttpClient;
use crate::scanner::fuzzable::FuzzableRequest;
use reqwest::header::HeaderMap;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use url::Url;

pub struct Crawler {
    pub max_depth: usize,
}

impl Crawler {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Crawl from `start_url` and return one scannable request per fetched
    /// in-scope page. Individual fetch failures skip the page and continue.
    pub async fn crawl(
        &self,
        client: &HttpClient,
        start_url: Url,
        scope: &Scope,
    ) -> Vec<FuzzableRequest> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut seeds = Vec::new();

        queue.push_back((start_url, 0usize));

        while let Some((url, depth)) = queue.pop_front() {
            if depth > self.max_depth || !visited.insert(url.as_str().to_string()) {
                continue;
            }

            let response = match client.get(&url, &HeaderMap::new()).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::debug!("crawl fetch failed for {}: {}", url, err);
                    continue;
                }
            };

            seeds.push(FuzzableRequest::new(url.clone()));

            let is_html = response
                .header("content-type")
                .map(|ct| ct.contains("html"))
                .unwrap_or(false);
            if !is_html {
                continue;
            }

            let body = response.body_text();
            if body.is_empty() {
                continue;
            }

            let document = Html::parse_document(&body);
            if let Ok(selector) = Selector::parse("a[href]") {
                for element in document.select(&selector) {
                    if let Some(href) = element.value().attr("href") {
                        if let Ok(next) = url.join(href) {
                            if scope.is_in_scope(&next) && !visited.contains(next.as_str()) {
                                queue.push_back((next, depth + 1));
                            }
                        }
                    }
                }
            }
        }

        seeds
    }
}
