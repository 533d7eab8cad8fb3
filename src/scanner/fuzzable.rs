//! Scannable request model and response-to-request conversion

use crate::core::scope::Scope;
use crate::http::response::HttpResponse;
use reqwest::header::HeaderMap;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// One probeable endpoint: a URL plus the headers it was reached with.
///
/// Produced by the crawler and by response conversion; the discovery core
/// treats it as read-only.
#[derive(Debug, Clone)]
pub struct FuzzableRequest {
    pub url: Url,
    pub headers: HeaderMap,
}

impl FuzzableRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(url: Url, headers: HeaderMap) -> Self {
        Self { url, headers }
    }
}

/// Turn a fetched response into scannable requests: the resource itself plus
/// any in-scope links embedded in an HTML body.
///
/// A name alone is not enough to scan — the resource has to be fetched first
/// so the request reflects what the server actually serves; this is the
/// conversion applied to each successfully fetched alternate.
pub fn requests_from_response(
    url: &Url,
    response: &HttpResponse,
    scope: &Scope,
) -> Vec<FuzzableRequest> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    seen.insert(url.as_str().to_string());
    result.push(FuzzableRequest::new(url.clone()));

    let is_html = response
        .header("content-type")
        .map(|ct| ct.contains("html"))
        .unwrap_or(false);
    if !is_html {
        return result;
    }

    let document = Html::parse_document(&response.body_text());
    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Ok(link) = url.join(href) {
                    if scope.is_in_scope(&link) && seen.insert(link.as_str().to_string()) {
                        result.push(FuzzableRequest::new(link));
                    }
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn html_response(body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "text/html".to_string());
        HttpResponse {
            id: 1,
            status: 200,
            headers,
            body: body.as_bytes().to_vec(),
            body_hash: String::new(),
            elapsed_ms: 0,
        }
    }

    #[test]
    fn test_conversion_always_yields_the_resource_itself() {
        let url = Url::parse("http://x/dir/backup.zip").unwrap();
        let scope = Scope::new("http://x/").unwrap();
        let mut response = html_response("");
        response.headers.clear();

        let requests = requests_from_response(&url, &response, &scope);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.as_str(), "http://x/dir/backup.zip");
    }

    #[test]
    fn test_conversion_extracts_in_scope_links() {
        let url = Url::parse("http://x/dir/page.html").unwrap();
        let scope = Scope::new("http://x/").unwrap();
        let response = html_response(
            r#"<a href="/admin/panel.php">a</a>
               <a href="http://elsewhere.example/out">b</a>
               <a href="/admin/panel.php">dup</a>"#,
        );

        let requests = requests_from_response(&url, &response, &scope);
        let urls: Vec<&str> = requests.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["http://x/dir/page.html", "http://x/admin/panel.php"]
        );
    }
}
