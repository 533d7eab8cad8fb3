use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "INFO",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{}", label)
    }
}

/// One recorded observation: either the vulnerability confirmation itself or
/// a resource the technique surfaced.
#[derive(Debug, Serialize, Clone)]
pub struct Finding {
    /// Plugin that recorded this, stamped by the reporter
    pub plugin: String,
    /// Reporter-stamped category ("info", "discovery", ...)
    pub category: String,
    pub title: String,
    pub url: String,
    pub http_method: String,
    pub severity: Severity,
    pub description: String,
    /// Id of the HTTP response this finding derives from, when there is one
    pub response_id: Option<u64>,
    /// SHA-256 of the response body, for later correlation
    pub body_hash: Option<String>,
}

impl Finding {
    /// The target negotiates: the informational confirmation recorded once
    /// per scan, the moment the verdict settles to enabled.
    pub fn negotiation_enabled(url: &str, response_id: u64) -> Self {
        Self {
            plugin: String::new(),
            category: String::new(),
            title: "HTTP Content Negotiation enabled".to_string(),
            url: url.to_string(),
            http_method: "GET".to_string(),
            severity: Severity::Info,
            description: "HTTP content negotiation is enabled in the remote web server. \
                          This could be used to bruteforce file names and find new resources."
                .to_string(),
            response_id: Some(response_id),
            body_hash: None,
        }
    }

    /// A resource surfaced through an Alternates listing.
    pub fn discovered_resource(url: &str, response_id: u64, body_hash: &str) -> Self {
        Self {
            plugin: String::new(),
            category: String::new(),
            title: "Resource discovered via content negotiation".to_string(),
            url: url.to_string(),
            http_method: "GET".to_string(),
            severity: Severity::Low,
            description: format!(
                "The resource {} was not linked from the site but is exposed \
                 through the server's content-negotiation alternates.",
                url
            ),
            response_id: Some(response_id),
            body_hash: Some(body_hash.to_string()),
        }
    }
}
