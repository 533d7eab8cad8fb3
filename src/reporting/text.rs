use crate::reporting::model::Finding;
use std::fmt::Write;

/// Plain-text report, one block per finding.
pub fn render(findings: &[Finding]) -> String {
    let mut output = String::new();

    writeln!(&mut output, "negscan report").unwrap();
    writeln!(&mut output, "==============").unwrap();

    if findings.is_empty() {
        writeln!(&mut output, "\nNo resources discovered.").unwrap();
        return output;
    }

    writeln!(&mut output, "\nTotal findings: {}", findings.len()).unwrap();

    for (idx, finding) in findings.iter().enumerate() {
        writeln!(&mut output, "\n[{}] {}", idx + 1, finding.title).unwrap();
        writeln!(&mut output, "    Severity : {}", finding.severity).unwrap();
        writeln!(
            &mut output,
            "    URL      : {} {}",
            finding.http_method, finding.url
        )
        .unwrap();
        if let Some(id) = finding.response_id {
            writeln!(&mut output, "    Response : #{}", id).unwrap();
        }
        if let Some(ref hash) = finding.body_hash {
            writeln!(&mut output, "    Body hash: {}", hash).unwrap();
        }
        writeln!(&mut output, "    {}", finding.description).unwrap();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let output = render(&[]);
        assert!(output.contains("No resources discovered"));
    }

    #[test]
    fn test_render_lists_findings() {
        let findings = vec![
            Finding::negotiation_enabled("http://x/backup", 3),
            Finding::discovered_resource("http://x/backup.zip", 4, "abc123"),
        ];

        let output = render(&findings);
        assert!(output.contains("Total findings: 2"));
        assert!(output.contains("HTTP Content Negotiation enabled"));
        assert!(output.contains("http://x/backup.zip"));
        assert!(output.contains("Body hash: abc123"));
        assert!(output.contains("Response : #3"));
    }
}
