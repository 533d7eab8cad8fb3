use crate::reporting::model::{Finding, Severity};
use serde::Serialize;

#[derive(Serialize)]
struct Report {
    scan_metadata: ScanMetadata,
    summary: Summary,
    findings: Vec<Finding>,
}

#[derive(Serialize)]
struct ScanMetadata {
    tool: String,
    version: String,
    scan_date: String,
}

#[derive(Serialize)]
struct Summary {
    total_findings: usize,
    discovered_resources: usize,
    informational: usize,
}

pub fn render(findings: &[Finding]) -> anyhow::Result<String> {
    let summary = Summary {
        total_findings: findings.len(),
        discovered_resources: findings
            .iter()
            .filter(|f| f.category == "discovery")
            .count(),
        informational: findings
            .iter()
            .filter(|f| matches!(f.severity, Severity::Info))
            .count(),
    };

    let report = Report {
        scan_metadata: ScanMetadata {
            tool: "negscan".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            scan_date: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        findings: findings.to_vec(),
    };

    let json = serde_json::to_string_pretty(&report)?;
    Ok(json)
}
