// SPDX-License-Identifier: PMPL-1.0-or-later
//! Remediation plan builder.
//!
//! Walks every (violation, node) pair of an audit result in input order
//! and resolves the issue type, tip and suggested fix for each. A plan
//! is never cached; it is a pure function of the audit result and the
//! tip store.

use crate::audit::{AuditResult, Impact, Node, Violation};
use crate::patch::patch;
use crate::rules::{map_rule_to_issue_type, IssueType};
use crate::tips::{resolve_tip, Tip, TipStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One actionable finding: a single offending element with its fix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationItem {
    pub rule_id: String,
    pub impact: Impact,
    pub description: String,
    pub help: String,
    pub help_url: String,
    /// Offending markup for this node
    pub html_snippet: String,
    /// Normalized category of the rule
    pub issue_type: IssueType,
    /// Resolved guidance, possibly a synthesized default
    pub tip: Tip,
    /// Patched markup, never empty
    pub suggested_fix: String,
    /// Engine suggestions for this node, passed through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl RemediationItem {
    /// Build the item for one node of a violation
    pub fn for_node(violation: &Violation, node: &Node, store: &dyn TipStore) -> Self {
        let issue_type = map_rule_to_issue_type(&violation.rule_id);
        let tip = resolve_tip(store, issue_type, violation.impact, &violation.rule_id);
        let suggested_fix = patch(&node.html, &violation.rule_id, violation.impact);

        Self {
            rule_id: violation.rule_id.clone(),
            impact: violation.impact,
            description: violation.description.clone(),
            help: violation.help.clone(),
            help_url: violation.help_url.clone(),
            html_snippet: node.html.clone(),
            issue_type,
            tip,
            suggested_fix,
            suggestions: node.suggestions.clone(),
        }
    }
}

/// Build the remediation plan: one item per violation node, in input order
pub fn build_plan(result: &AuditResult, store: &dyn TipStore) -> Vec<RemediationItem> {
    let plan: Vec<RemediationItem> = result
        .violations
        .iter()
        .flat_map(|violation| {
            violation
                .nodes
                .iter()
                .map(move |node| RemediationItem::for_node(violation, node, store))
        })
        .collect();

    debug!(
        "Built remediation plan with {} item(s) from {} violation(s)",
        plan.len(),
        result.violations.len()
    );

    plan
}
