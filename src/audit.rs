// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit result types.
//!
//! These mirror the JSON shape produced by the external audit engine:
//! a list of violations (one per failing rule, each with the offending
//! nodes) plus a severity summary. The engine output is treated as a
//! trusted contract; anything that does not deserialize is rejected
//! before a remediation plan is built.

use crate::error::Result;
use crate::score::calculate_score;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Impact level assigned to a violation by the audit engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Blocks access for some users
    Critical,
    /// Seriously degrades access
    Serious,
    /// Noticeable barrier
    Moderate,
    /// Annoyance
    Minor,
}

impl Impact {
    /// All impact levels, most severe first
    pub const ALL: [Impact; 4] = [Impact::Critical, Impact::Serious, Impact::Moderate, Impact::Minor];

    /// Lowercase name as used by the audit engine
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Critical => "critical",
            Impact::Serious => "serious",
            Impact::Moderate => "moderate",
            Impact::Minor => "minor",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Impact::Critical),
            "serious" => Ok(Impact::Serious),
            "moderate" => Ok(Impact::Moderate),
            "minor" => Ok(Impact::Minor),
            other => Err(format!("Unknown impact level: {}", other)),
        }
    }
}

/// One offending DOM instance of a violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Exact markup that triggered the rule
    pub html: String,
    /// Engine-provided suggestions, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Node {
    /// Create a node from its markup
    pub fn new(html: &str) -> Self {
        Self {
            html: html.to_string(),
            suggestions: None,
        }
    }
}

/// A single failing audit rule and every node it fired on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Audit engine rule identifier (e.g., "image-alt")
    #[serde(rename = "id")]
    pub rule_id: String,
    /// Impact level
    pub impact: Impact,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(rename = "helpUrl", default)]
    pub help_url: String,
    /// Offending nodes, in engine order
    pub nodes: Vec<Node>,
}

impl Violation {
    /// Create a violation with empty descriptive text and no nodes
    pub fn new(rule_id: &str, impact: Impact) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            impact,
            description: String::new(),
            help: String::new(),
            help_url: String::new(),
            nodes: Vec::new(),
        }
    }

    /// Set the description and help text
    pub fn with_help(mut self, description: &str, help: &str, help_url: &str) -> Self {
        self.description = description.to_string();
        self.help = help.to_string();
        self.help_url = help_url.to_string();
        self
    }

    /// Append an offending node
    pub fn with_node(mut self, html: &str) -> Self {
        self.nodes.push(Node::new(html));
        self
    }
}

/// Per-severity violation counts reported by the audit engine.
///
/// `total_violations` is expected to equal the sum of the four counts;
/// the producer is trusted to uphold that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveritySummary {
    #[serde(default)]
    pub total_violations: usize,
    #[serde(default)]
    pub critical: usize,
    #[serde(default)]
    pub serious: usize,
    #[serde(default)]
    pub moderate: usize,
    #[serde(default)]
    pub minor: usize,
}

impl SeveritySummary {
    /// Build a summary from the four counts
    pub fn new(critical: usize, serious: usize, moderate: usize, minor: usize) -> Self {
        Self {
            total_violations: critical + serious + moderate + minor,
            critical,
            serious,
            moderate,
            minor,
        }
    }

    /// Count for a single impact level
    pub fn count(&self, impact: Impact) -> usize {
        match impact {
            Impact::Critical => self.critical,
            Impact::Serious => self.serious,
            Impact::Moderate => self.moderate,
            Impact::Minor => self.minor,
        }
    }

    /// (impact, count) pairs, most severe first
    pub fn counts(&self) -> [(Impact, usize); 4] {
        Impact::ALL.map(|impact| (impact, self.count(impact)))
    }

    /// Health score derived from these counts
    pub fn score(&self) -> u8 {
        calculate_score(self.critical, self.serious, self.moderate, self.minor)
    }
}

/// Full audit engine output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Violations in engine order
    pub violations: Vec<Violation>,
    /// Severity counts
    pub summary: SeveritySummary,
}

impl AuditResult {
    /// Parse an audit result from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let result: AuditResult = serde_json::from_str(content)?;
        debug!(
            "Parsed audit result with {} violation(s), {} node(s)",
            result.violations.len(),
            result.node_count()
        );
        Ok(result)
    }

    /// Read and parse an audit result file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Number of offending nodes across all violations
    pub fn node_count(&self) -> usize {
        self.violations.iter().map(|v| v.nodes.len()).sum()
    }
}
