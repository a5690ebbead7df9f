// SPDX-License-Identifier: PMPL-1.0-or-later
//! Remediationbot - accessibility remediation engine
//!
//! Turns the output of an accessibility audit engine (rule id, impact,
//! offending markup) into an actionable remediation report.
//!
//! ## Components
//!
//! - **Rules**: maps audit rule ids onto a fixed issue-type taxonomy
//! - **Tips**: remediation guidance keyed by (issue type, severity)
//! - **Patch**: best-effort rewrite of the offending HTML snippet
//! - **Plan**: one remediation item per violation/node pair
//! - **Score**: 0-100 health score from severity counts
//! - **Report**: text and JSON rendering of a full remediation report

pub mod audit;
pub mod config;
pub mod error;
pub mod patch;
pub mod plan;
pub mod report;
pub mod rules;
pub mod score;
pub mod tips;

pub use audit::{AuditResult, Impact, Node, SeveritySummary, Violation};
pub use error::{RemediationError, Result};
pub use patch::patch;
pub use plan::{build_plan, RemediationItem};
pub use rules::{map_rule_to_issue_type, IssueType};
pub use score::calculate_score;
pub use tips::{find_tip, resolve_tip, MemoryTipStore, Tip, TipStore};
