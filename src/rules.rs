// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit rule to issue-type mapping.
//!
//! Audit engines report dozens of rule ids; remediation guidance is kept
//! per issue type, a fixed taxonomy of ten categories with `Other` as the
//! catch-all.

use serde::{Deserialize, Serialize};

/// Normalized accessibility issue category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    ImgAlt,
    HeadingStructure,
    ColorContrast,
    FormLabels,
    KeyboardNav,
    AriaMisuse,
    SemanticMarkup,
    FocusIndicator,
    LinkPurpose,
    Other,
}

impl IssueType {
    /// Every issue type in the taxonomy
    pub const ALL: [IssueType; 10] = [
        IssueType::ImgAlt,
        IssueType::HeadingStructure,
        IssueType::ColorContrast,
        IssueType::FormLabels,
        IssueType::KeyboardNav,
        IssueType::AriaMisuse,
        IssueType::SemanticMarkup,
        IssueType::FocusIndicator,
        IssueType::LinkPurpose,
        IssueType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::ImgAlt => "img_alt",
            IssueType::HeadingStructure => "heading_structure",
            IssueType::ColorContrast => "color_contrast",
            IssueType::FormLabels => "form_labels",
            IssueType::KeyboardNav => "keyboard_nav",
            IssueType::AriaMisuse => "aria_misuse",
            IssueType::SemanticMarkup => "semantic_markup",
            IssueType::FocusIndicator => "focus_indicator",
            IssueType::LinkPurpose => "link_purpose",
            IssueType::Other => "other",
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown issue type: {}", s))
    }
}

/// Map an audit engine rule id onto the issue taxonomy.
///
/// Exact, case-sensitive match; anything unrecognized is `Other`.
pub fn map_rule_to_issue_type(rule_id: &str) -> IssueType {
    match rule_id {
        "image-alt" => IssueType::ImgAlt,
        "heading-order" => IssueType::HeadingStructure,
        "color-contrast" => IssueType::ColorContrast,
        "label" => IssueType::FormLabels,
        "keyboard" => IssueType::KeyboardNav,
        "aria-required-attr" | "aria-roles" | "aria-valid-attr" => IssueType::AriaMisuse,
        "document-structure" => IssueType::SemanticMarkup,
        "focus-visible" => IssueType::FocusIndicator,
        "link-name" => IssueType::LinkPurpose,
        _ => IssueType::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rules() {
        let table = [
            ("image-alt", IssueType::ImgAlt),
            ("heading-order", IssueType::HeadingStructure),
            ("color-contrast", IssueType::ColorContrast),
            ("label", IssueType::FormLabels),
            ("keyboard", IssueType::KeyboardNav),
            ("aria-required-attr", IssueType::AriaMisuse),
            ("aria-roles", IssueType::AriaMisuse),
            ("aria-valid-attr", IssueType::AriaMisuse),
            ("document-structure", IssueType::SemanticMarkup),
            ("focus-visible", IssueType::FocusIndicator),
            ("link-name", IssueType::LinkPurpose),
        ];
        for (rule, expected) in table {
            assert_eq!(map_rule_to_issue_type(rule), expected, "rule {}", rule);
        }
    }

    #[test]
    fn test_unknown_rules_map_to_other() {
        for rule in ["", "button-name", "Image-Alt", "image-alt ", "missing-alt", "form-label"] {
            assert_eq!(map_rule_to_issue_type(rule), IssueType::Other, "rule {:?}", rule);
        }
    }

    #[test]
    fn test_issue_type_names_round_trip() {
        for issue in IssueType::ALL {
            assert_eq!(issue.as_str().parse::<IssueType>().unwrap(), issue);
        }
        assert!("img-alt".parse::<IssueType>().is_err());
    }

    #[test]
    fn test_issue_type_serializes_snake_case() {
        let json = serde_json::to_string(&IssueType::HeadingStructure).unwrap();
        assert_eq!(json, "\"heading_structure\"");
    }
}
