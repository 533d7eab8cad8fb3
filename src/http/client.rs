//! HTTP client with scope enforcement, rate limiting, and cookie support

use crate::core::rate_limit::RateLimiter;
use crate::core::scope::Scope;
use crate::http::response::HttpResponse;
use anyhow::Result;
use reqwest::header::{self, HeaderMap};
use reqwest::{redirect::Policy, Client};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use url::Url;

pub struct HttpClient {
    client: Client,
    scope: Scope,
    limiter: RateLimiter,
    default_headers: HashMap<String, String>,
    cookies: Option<String>,
    next_id: AtomicU64,
}

impl HttpClient {
    pub fn new(scope: Scope, limiter: RateLimiter, timeout_secs: u64) -> Result<Self> {
        Self::with_auth(scope, limiter, timeout_secs, None, HashMap::new())
    }

    /// Create HTTP client with session cookies and extra headers for
    /// authenticated scanning.
    pub fn with_auth(
        scope: Scope,
        limiter: RateLimiter,
        timeout_secs: u64,
        cookies: Option<String>,
        headers: HashMap<String, String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .redirect(Policy::none())
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            scope,
            limiter,
            default_headers: headers,
            cookies,
            next_id: AtomicU64::new(1),
        })
    }

    /// Issue a GET. Failures surface as `Err`, never a panic; callers decide
    /// whether a failed probe is fatal.
    pub async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HttpResponse> {
        self.limiter.wait().await;

        if !self.scope.is_in_scope(url) {
            anyhow::bail!("blocked out-of-scope request: {}", url);
        }

        let start = Instant::now();

        let mut request = self.client.get(url.clone()).headers(headers.clone());

        for (key, value) in &self.default_headers {
            if let Ok(name) = header::HeaderName::from_bytes(key.as_bytes()) {
                if let Ok(value) = header::HeaderValue::from_str(value) {
                    request = request.header(name, value);
                }
            }
        }

        if let Some(ref cookies) = self.cookies {
            request = request.header(header::COOKIE, cookies);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();

        // Header names lowercased for the case-insensitive lookup contract.
        let mut response_headers = HashMap::new();
        for (k, v) in response.headers().iter() {
            response_headers.insert(
                k.as_str().to_ascii_lowercase(),
                v.to_str().unwrap_or("").to_string(),
            );
        }

        let body = response.bytes().await.unwrap_or_default().to_vec();

        let mut hasher = Sha256::new();
        hasher.update(&body);
        let body_hash = format!("{:x}", hasher.finalize());

        Ok(HttpResponse {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            status,
            headers: response_headers,
            body,
            body_hash,
            elapsed_ms: start.elapsed().as_millis(),
        })
    }
}
