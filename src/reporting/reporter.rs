use crate::reporting::model::Finding;
use std::sync::Mutex;

/// Append-only knowledge-base sink.
///
/// Handed around as `Arc<Reporter>`; the discovery core only ever writes,
/// the scan engine reads everything back once at the end to render the
/// report.
#[derive(Default)]
pub struct Reporter {
    findings: Mutex<Vec<Finding>>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding under the given plugin name and category.
    pub fn record(&self, plugin: &str, category: &str, mut finding: Finding) {
        finding.plugin = plugin.to_string();
        finding.category = category.to_string();
        self.findings
            .lock()
            .expect("reporter lock poisoned")
            .push(finding);
    }

    pub fn findings(&self) -> Vec<Finding> {
        self.findings
            .lock()
            .expect("reporter lock poisoned")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_stamps_plugin_and_category() {
        let reporter = Reporter::new();
        reporter.record(
            "content_negotiation",
            "info",
            Finding::negotiation_enabled("http://x/backup", 7),
        );

        let findings = reporter.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].plugin, "content_negotiation");
        assert_eq!(findings[0].category, "info");
        assert_eq!(findings[0].response_id, Some(7));
    }

    #[test]
    fn test_records_append_in_order() {
        let reporter = Reporter::new();
        reporter.record(
            "content_negotiation",
            "discovery",
            Finding::discovered_resource("http://x/a.zip", 1, "aa"),
        );
        reporter.record(
            "content_negotiation",
            "discovery",
            Finding::discovered_resource("http://x/b.zip", 2, "bb"),
        );

        let urls: Vec<String> = reporter.findings().iter().map(|f| f.url.clone()).collect();
        assert_eq!(urls, vec!["http://x/a.zip", "http://x/b.zip"]);
    }
}
