//! Single negotiation probe and Alternates header parsing

use crate::http::client::HttpClient;
use crate::http::response::HttpResponse;
use anyhow::Result;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::sync::Arc;
use url::Url;

/// Media type no server supports; forces a negotiating server into a
/// 406-style response that lists its alternates.
const FORCED_ACCEPT: &str = "negscan/fictional";

/// What one probe observed: the alternate names the server admitted to, and
/// the raw response they came from.
pub struct ProbeOutcome {
    pub alternates: Vec<String>,
    pub response: HttpResponse,
}

/// Issues negotiation probes. Stateless apart from the shared client; safe
/// to call from any number of workers.
pub struct NegotiationProber {
    client: Arc<HttpClient>,
}

impl NegotiationProber {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// GET `url` with an Accept header the server cannot satisfy and parse
    /// the Alternates header out of whatever comes back. An empty alternate
    /// list is the inconclusive/negative signal, not an error.
    pub async fn probe(&self, url: &Url, headers: &HeaderMap) -> Result<ProbeOutcome> {
        let mut probe_headers = headers.clone();
        probe_headers.insert(ACCEPT, HeaderValue::from_static(FORCED_ACCEPT));

        let response = self.client.get(url, &probe_headers).await?;

        let alternates = response
            .header("alternates")
            .map(parse_alternates)
            .unwrap_or_default();

        Ok(ProbeOutcome {
            alternates,
            response,
        })
    }
}

/// Extract every double-quoted token from an Alternates header value.
///
/// The header is an RFC 2295-style list:
///
/// ```text
/// {"backup.php.bak" 1 {type application/x-trash} {length 0}},
/// {"backup.zip" 1 {type application/zip} {length 0}}
/// ```
///
/// The quoted filenames are self-delimiting, so a quoted-substring scan is
/// all the parsing required. Content without quoted tokens yields an empty
/// list, never an error.
pub fn parse_alternates(value: &str) -> Vec<String> {
    match Regex::new(r#""(.*?)""#) {
        Ok(re) => re
            .captures_iter(value)
            .map(|cap| cap[1].to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alternates_extracts_quoted_names() {
        let value = r#"{"backup.php.bak" 1 {type application/x-trash} {length 0}}, {"backup.zip" 1 {type application/zip} {length 0}}"#;
        assert_eq!(parse_alternates(value), vec!["backup.php.bak", "backup.zip"]);
    }

    #[test]
    fn test_parse_alternates_single_entry() {
        assert_eq!(
            parse_alternates(r#"{"index.html.en" 1 {type text/html}}"#),
            vec!["index.html.en"]
        );
    }

    #[test]
    fn test_parse_alternates_malformed_degrades_to_empty() {
        assert!(parse_alternates("").is_empty());
        assert!(parse_alternates("no quoted tokens here").is_empty());
        assert!(parse_alternates("{unbalanced \"trailing").is_empty());
    }
}
