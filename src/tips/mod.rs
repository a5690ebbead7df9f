// SPDX-License-Identifier: PMPL-1.0-or-later
//! Remediation tip repository.
//!
//! Tips are canned guidance keyed by (issue type, severity). Lookup never
//! fails from the caller's point of view:
//!
//! 1. exact (issue type, severity) match
//! 2. first stored tip for the issue type, in insertion order
//! 3. a synthesized default naming the severity and rule id

pub mod seed;

use crate::audit::Impact;
use crate::error::Result;
use crate::rules::IssueType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Human remediation guidance for an issue type at a given severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub issue_type: IssueType,
    pub severity: Impact,
    /// Why the issue matters
    #[serde(default)]
    pub description: String,
    /// What to do about it
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub code_example_before: String,
    #[serde(default)]
    pub code_example_after: String,
    /// Guideline the tip is based on (e.g., "WCAG 1.1.1 Non-text Content (Level A)")
    #[serde(default, alias = "wcag_reference")]
    pub guideline_reference: String,
}

impl Tip {
    /// Default tip used when the repository has nothing for an issue type
    pub fn fallback(issue_type: IssueType, severity: Impact, rule_id: &str) -> Self {
        Self {
            issue_type,
            severity,
            description: String::new(),
            solution: format!("Address the {} {} issue.", severity, rule_id),
            code_example_before: String::new(),
            code_example_after: String::new(),
            guideline_reference: String::new(),
        }
    }

    /// Whether the tip carries before/after code samples
    pub fn has_examples(&self) -> bool {
        !self.code_example_before.is_empty() || !self.code_example_after.is_empty()
    }
}

/// Queryable source of remediation tips
pub trait TipStore: Send + Sync {
    /// All stored tips for an issue type, in insertion order
    fn tips_for(&self, issue_type: IssueType) -> Result<Vec<Tip>>;
}

/// Resolve the tip for an issue, falling back to a synthesized default on a miss.
///
/// Errors only when the store itself fails.
pub fn find_tip(
    store: &dyn TipStore,
    issue_type: IssueType,
    severity: Impact,
    rule_id: &str,
) -> Result<Tip> {
    let candidates = store.tips_for(issue_type)?;

    if let Some(tip) = candidates.iter().find(|t| t.severity == severity) {
        return Ok(tip.clone());
    }

    if let Some(tip) = candidates.into_iter().next() {
        debug!(
            "No {} tip for {}, using {} tip",
            severity, issue_type, tip.severity
        );
        return Ok(tip);
    }

    debug!("No stored tip for {}, synthesizing default", issue_type);
    Ok(Tip::fallback(issue_type, severity, rule_id))
}

/// Like [`find_tip`], but a failing store also yields the default tip
pub fn resolve_tip(
    store: &dyn TipStore,
    issue_type: IssueType,
    severity: Impact,
    rule_id: &str,
) -> Tip {
    find_tip(store, issue_type, severity, rule_id).unwrap_or_else(|e| {
        warn!("Tip lookup for {} ({}) failed: {}", rule_id, severity, e);
        Tip::fallback(issue_type, severity, rule_id)
    })
}

/// In-memory tip repository, read-only once populated
#[derive(Debug, Clone, Default)]
pub struct MemoryTipStore {
    tips: Vec<Tip>,
}

impl MemoryTipStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the default tip set
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed_defaults();
        store
    }

    /// Insert a tip unless one already exists for its (issue type, severity).
    ///
    /// Returns whether the tip was added.
    pub fn upsert(&mut self, tip: Tip) -> bool {
        let exists = self
            .tips
            .iter()
            .any(|t| t.issue_type == tip.issue_type && t.severity == tip.severity);
        if exists {
            return false;
        }
        self.tips.push(tip);
        true
    }

    /// Upsert the default tip set, returning how many entries were added
    pub fn seed_defaults(&mut self) -> usize {
        seed::default_tips()
            .into_iter()
            .filter(|tip| self.upsert(tip.clone()))
            .count()
    }

    /// Upsert tips from a JSON catalog (an array of tips)
    pub fn load_catalog_json(&mut self, content: &str) -> Result<usize> {
        let tips: Vec<Tip> = serde_json::from_str(content)?;
        Ok(tips.into_iter().filter(|tip| self.upsert(tip.clone())).count())
    }

    /// Upsert tips from a JSON catalog file
    pub fn load_catalog(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let added = self.load_catalog_json(&content)?;
        info!("Loaded {} tip(s) from {}", added, path.display());
        Ok(added)
    }

    /// Write the store as a JSON catalog
    pub fn save_catalog(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tips)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Stored tips in insertion order
    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

impl TipStore for MemoryTipStore {
    fn tips_for(&self, issue_type: IssueType) -> Result<Vec<Tip>> {
        Ok(self
            .tips
            .iter()
            .filter(|t| t.issue_type == issue_type)
            .cloned()
            .collect())
    }
}
