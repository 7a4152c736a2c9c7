//! Formatted output helpers for CLI commands.

use skopa_common::finding::{Finding, Severity};
use skopa_inspect::registry::CheckReport;

/// Renders a single finding as an indented report line.
#[must_use]
pub fn render_finding(finding: &Finding) -> String {
    format!("  [{:<4}] {}", finding.severity, finding.message)
}

/// Builds the one-line summary printed after an evaluation.
#[must_use]
pub fn summarize(reports: &[CheckReport]) -> String {
    let findings: usize = reports.iter().map(|report| report.findings.len()).sum();
    let warnings: usize = reports
        .iter()
        .flat_map(|report| &report.findings)
        .filter(|finding| finding.severity == Severity::Warning)
        .count();
    format!(
        "{} check(s), {findings} finding(s), {warnings} warning(s)",
        reports.len()
    )
}
