// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for remediation plans.
//!
//! Supports multiple output formats:
//! - Text: human-readable plan with score, severity breakdown and fixes
//! - JSON: structured report for programmatic consumption

use crate::audit::{AuditResult, SeveritySummary};
use crate::plan::{build_plan, RemediationItem};
use crate::tips::TipStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Everything the view layer needs to render one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationReport {
    /// When this report was generated
    pub generated_at: DateTime<Utc>,
    /// Severity counts as reported by the audit engine
    pub summary: SeveritySummary,
    /// Health score derived from `summary`
    pub score: u8,
    /// One item per offending node
    pub items: Vec<RemediationItem>,
}

impl RemediationReport {
    /// Build a report for an audit result
    pub fn build(result: &AuditResult, store: &dyn TipStore) -> Self {
        let items = build_plan(result, store);
        let score = result.summary.score();
        info!(
            "Report: {} violation(s), {} remediation item(s), score {}",
            result.summary.total_violations,
            items.len(),
            score
        );

        Self {
            generated_at: Utc::now(),
            summary: result.summary,
            score,
            items,
        }
    }
}

/// Generate a report in the requested format
pub fn generate_report(report: &RemediationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(report),
        OutputFormat::Json => generate_json_report(report),
    }
}

/// Generate human-readable text report
fn generate_text_report(report: &RemediationReport) -> String {
    let mut output = String::new();

    output.push_str("=== Remediationbot Accessibility Report ===\n\n");
    output.push_str(&format!("Score: {}/100\n", report.score));
    output.push_str(&format!(
        "Total violations: {}\n",
        report.summary.total_violations
    ));
    for (impact, count) in report.summary.counts() {
        output.push_str(&format!("  {:<9} {}\n", impact, count));
    }
    output.push('\n');

    if report.items.is_empty() {
        output.push_str("No violations to remediate.\n");
        return output;
    }

    output.push_str(&format!(
        "--- Remediation plan ({} item(s)) ---\n\n",
        report.items.len()
    ));

    for (idx, item) in report.items.iter().enumerate() {
        output.push_str(&format!(
            "{}. [{}] ({}) {}\n",
            idx + 1,
            item.rule_id,
            item.impact,
            item.help
        ));

        if !item.help_url.is_empty() {
            output.push_str(&format!("  More info: {}\n", item.help_url));
        }

        output.push_str(&format!("  Element: {}\n", item.html_snippet));
        output.push_str(&format!("  Suggested fix: {}\n", item.suggested_fix));
        output.push_str(&format!("  Tip: {}\n", item.tip.solution));

        if !item.tip.guideline_reference.is_empty() {
            output.push_str(&format!("  Guideline: {}\n", item.tip.guideline_reference));
        }

        if item.tip.has_examples() {
            output.push_str(&format!("  Before: {}\n", item.tip.code_example_before));
            output.push_str(&format!("  After: {}\n", item.tip.code_example_after));
        }

        output.push('\n');
    }

    output
}

/// Generate JSON report
fn generate_json_report(report: &RemediationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{Impact, Violation};
    use crate::tips::MemoryTipStore;

    fn sample_result() -> AuditResult {
        AuditResult {
            violations: vec![Violation::new("image-alt", Impact::Critical)
                .with_help(
                    "Ensures images have alternate text",
                    "Images must have alt text",
                    "https://dequeuniversity.com/rules/axe/4.0/image-alt",
                )
                .with_node("<img src='logo.png'>")],
            summary: SeveritySummary::new(1, 0, 0, 0),
        }
    }

    #[test]
    fn test_text_report_empty() {
        let result = AuditResult {
            violations: Vec::new(),
            summary: SeveritySummary::default(),
        };
        let report = RemediationReport::build(&result, &MemoryTipStore::seeded());
        let text = generate_report(&report, OutputFormat::Text);
        assert!(text.contains("Score: 100/100"));
        assert!(text.contains("No violations to remediate"));
    }

    #[test]
    fn test_text_report_with_items() {
        let report = RemediationReport::build(&sample_result(), &MemoryTipStore::seeded());
        let text = generate_report(&report, OutputFormat::Text);
        assert!(text.contains("Score: 90/100"));
        assert!(text.contains("[image-alt] (critical) Images must have alt text"));
        assert!(text.contains("alt=\"Descriptive alt text\""));
        assert!(text.contains("WCAG 1.1.1"));
        assert!(text.contains("Before: <img src=\"logo.png\">"));
    }

    #[test]
    fn test_json_report() {
        let report = RemediationReport::build(&sample_result(), &MemoryTipStore::seeded());
        let json = generate_report(&report, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["score"], 90);
        assert_eq!(parsed["summary"]["critical"], 1);
        assert!(parsed["items"].is_array());
        assert_eq!(parsed["items"][0]["issue_type"], "img_alt");
        assert_eq!(parsed["items"][0]["tip"]["severity"], "serious");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
