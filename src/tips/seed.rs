// SPDX-License-Identifier: PMPL-1.0-or-later
//! Default remediation tips, one per issue type.

use crate::audit::Impact;
use crate::rules::IssueType;
use crate::tips::Tip;

/// (issue type, severity, description, solution, before, after, reference)
type TipRow = (
    IssueType,
    Impact,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const DEFAULT_TIPS: &[TipRow] = &[
    (
        IssueType::ImgAlt,
        Impact::Serious,
        "Images without alt text are not accessible to screen reader users",
        "Add descriptive alt text to all images. If the image is decorative, use alt=\"\".",
        "<img src=\"logo.png\">",
        "<img src=\"logo.png\" alt=\"Company Logo\">",
        "WCAG 1.1.1 Non-text Content (Level A)",
    ),
    (
        IssueType::HeadingStructure,
        Impact::Serious,
        "Skipping heading levels or using headings incorrectly disrupts document structure",
        "Use headings in a hierarchical order (h1, then h2, etc.) to properly structure your content",
        "<h1>Page Title</h1>\n<h3>Subtitle</h3>",
        "<h1>Page Title</h1>\n<h2>Subtitle</h2>",
        "WCAG 1.3.1 Info and Relationships (Level A)",
    ),
    (
        IssueType::ColorContrast,
        Impact::Serious,
        "Text with insufficient color contrast is difficult to read for users with low vision",
        "Ensure text has a contrast ratio of at least 4.5:1 for normal text and 3:1 for large text",
        "<p style=\"color: #999; background-color: #fff;\">Low contrast text</p>",
        "<p style=\"color: #595959; background-color: #fff;\">Higher contrast text</p>",
        "WCAG 1.4.3 Contrast (Minimum) (Level AA)",
    ),
    (
        IssueType::FormLabels,
        Impact::Critical,
        "Form inputs without proper labels are not accessible to screen reader users",
        "Ensure all form inputs have associated labels that are programmatically connected using the \"for\" attribute",
        "<input type=\"text\" id=\"name\" placeholder=\"Enter your name\">",
        "<label for=\"name\">Name</label>\n<input type=\"text\" id=\"name\">",
        "WCAG 3.3.2 Labels or Instructions (Level A)",
    ),
    (
        IssueType::KeyboardNav,
        Impact::Critical,
        "Some elements cannot be accessed or operated with a keyboard alone",
        "Ensure all interactive elements are keyboard accessible and have visible focus indicators",
        "<div onclick=\"openMenu()\">Menu</div>",
        "<button onclick=\"openMenu()\" tabindex=\"0\">Menu</button>",
        "WCAG 2.1.1 Keyboard (Level A)",
    ),
    (
        IssueType::AriaMisuse,
        Impact::Moderate,
        "ARIA attributes are being used incorrectly or on inappropriate elements",
        "Use ARIA attributes according to their specifications, and prefer native HTML elements when possible",
        "<div role=\"button\">Click me</div>",
        "<button>Click me</button>",
        "WCAG 4.1.2 Name, Role, Value (Level A)",
    ),
    (
        IssueType::SemanticMarkup,
        Impact::Moderate,
        "Using non-semantic elements makes content less accessible to screen readers",
        "Use semantic HTML elements like <nav>, <main>, <article>, etc. to provide structure to your document",
        "<div class=\"navigation\">\n  <div class=\"nav-item\">Home</div>\n</div>",
        "<nav>\n  <ul>\n    <li><a href=\"#\">Home</a></li>\n  </ul>\n</nav>",
        "WCAG 1.3.1 Info and Relationships (Level A)",
    ),
    (
        IssueType::FocusIndicator,
        Impact::Serious,
        "Interactive elements without visible focus indicators are difficult to use for keyboard users",
        "Ensure all interactive elements have a visible focus state. Do not remove the outline without providing an alternative",
        "a:focus { outline: none; }",
        "a:focus { outline: 2px solid #0066cc; }",
        "WCAG 2.4.7 Focus Visible (Level AA)",
    ),
    (
        IssueType::LinkPurpose,
        Impact::Moderate,
        "Links with unclear text like \"click here\" or \"read more\" are ambiguous to screen reader users",
        "Make link text descriptive of its destination. Avoid generic phrases like \"click here\"",
        "<a href=\"/pricing\">Click here</a> for pricing information.",
        "<a href=\"/pricing\">View our pricing information</a>",
        "WCAG 2.4.4 Link Purpose (In Context) (Level A)",
    ),
    (
        IssueType::Other,
        Impact::Moderate,
        "Various accessibility issues that don't fit into other categories",
        "Address the specific issue according to WCAG guidelines and best practices for web accessibility",
        "<!-- Example problematic code would go here -->",
        "<!-- Example fixed code would go here -->",
        "Various WCAG Guidelines",
    ),
];

/// The default tip set, in seeding order
pub fn default_tips() -> Vec<Tip> {
    DEFAULT_TIPS
        .iter()
        .map(|&(issue_type, severity, description, solution, before, after, reference)| Tip {
            issue_type,
            severity,
            description: description.to_string(),
            solution: solution.to_string(),
            code_example_before: before.to_string(),
            code_example_after: after.to_string(),
            guideline_reference: reference.to_string(),
        })
        .collect()
}
