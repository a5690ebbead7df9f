// SPDX-License-Identifier: PMPL-1.0-or-later
//! Snippet patcher: best-effort rewrites of offending HTML.
//!
//! Each audit rule family has a textual transform that produces an
//! illustrative fix for the snippet the audit engine flagged. Transforms
//! splice strings around regex matches; questions like "does this snippet
//! contain a `<label>`" are answered by parsing it as an HTML fragment.
//!
//! When no transform applies, or a transform leaves the snippet unchanged,
//! the snippet is annotated with a `<!-- FIXED: rule - impact impact -->`
//! comment so the output always differs from the input and is never empty.

pub mod aria;
pub mod content;
pub mod forms;
pub mod structure;

use crate::audit::Impact;
use regex::{Match, Regex};
use scraper::{Html, Selector};
use std::ops::Range;
use tracing::debug;

/// Produce a suggested fix for `html` flagged by `rule_id`
pub fn patch(html: &str, rule_id: &str, impact: Impact) -> String {
    let fixed = match rule_id {
        "image-alt" => content::fix_image_alt(html),
        "button-name" => content::fix_button_name(html),
        "color-contrast" => content::fix_color_contrast(html),
        "link-name" => content::fix_link_name(html),
        "label" => forms::fix_label(html),
        "list" | "listitem" => structure::fix_list(html),
        "table-fake-caption" | "td-headers-attr" | "th-has-data-cells" => {
            structure::fix_table(html)
        }
        "document-title" => structure::fix_document_title(html),
        "heading-order" => structure::fix_heading_order(html),
        "aria-roles" => aria::fix_aria_roles(html),
        _ => None,
    };

    match fixed {
        Some(fix) if fix != html && !fix.is_empty() => fix,
        _ => {
            debug!("No specific fix for {}, annotating snippet", rule_id);
            annotate(html, rule_id, impact)
        }
    }
}

/// Mark the snippet with a comment naming the rule and impact.
///
/// The comment goes right after the first tag, or in front of the whole
/// snippet when there is no tag to anchor on.
pub fn annotate(html: &str, rule_id: &str, impact: Impact) -> String {
    let comment = format!("<!-- FIXED: {} - {} impact -->", rule_id, impact);

    let first_tag_end = html
        .find('<')
        .and_then(|open| html[open..].find('>').map(|close| open + close + 1));

    match first_tag_end {
        Some(pos) => insert_at(html, pos, &comment),
        None => format!("{}{}", comment, html),
    }
}

/// Regex matching an opening tag with the given name, case-insensitively
pub(crate) fn tag_regex(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)<{}\b[^>]*>", regex::escape(name))).expect("valid regex")
}

/// First opening tag with the given name
pub(crate) fn first_tag<'h>(html: &'h str, name: &str) -> Option<Match<'h>> {
    tag_regex(name).find(html)
}

/// Opening tags of every element, in document order, with their names
pub(crate) fn elements(html: &str) -> Vec<(Match<'_>, String)> {
    let re = Regex::new(r"<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*>").expect("valid regex");
    re.captures_iter(html)
        .filter_map(|caps| {
            let tag = caps.get(0)?;
            let name = caps.get(1)?.as_str().to_lowercase();
            Some((tag, name))
        })
        .collect()
}

/// An attribute of an opening tag. Offsets are relative to the tag text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Attr {
    pub(crate) name: String,
    /// `name` through the end of the value
    pub(crate) span: Range<usize>,
    /// Value text, inside the quotes when quoted
    pub(crate) value: Option<Range<usize>>,
    pub(crate) quoted: bool,
}

/// Attributes of an opening tag, in source order.
///
/// Quoted values are consumed whole, so attribute-like text inside another
/// attribute's value is not reported.
pub(crate) fn attributes(tag: &str) -> Vec<Attr> {
    let name_re = Regex::new(r"^<[a-zA-Z][a-zA-Z0-9-]*").expect("valid regex");
    let attr_re = Regex::new(
        r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#,
    )
    .expect("valid regex");

    let Some(tag_name) = name_re.find(tag) else {
        return Vec::new();
    };
    let offset = tag_name.end();

    attr_re
        .captures_iter(&tag[offset..])
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            let quoted = caps.get(2).or_else(|| caps.get(3));
            let value = quoted.or_else(|| caps.get(4));
            Some(Attr {
                name: name.as_str().to_lowercase(),
                span: offset + whole.start()..offset + whole.end(),
                value: value.map(|v| offset + v.start()..offset + v.end()),
                quoted: quoted.is_some(),
            })
        })
        .collect()
}

/// Find an attribute on an opening tag by name, case-insensitively
pub(crate) fn find_attr(tag: &str, attr: &str) -> Option<Attr> {
    attributes(tag).into_iter().find(|a| a.name.eq_ignore_ascii_case(attr))
}

/// Whether an opening tag carries the attribute, with or without a value
pub(crate) fn has_attr(tag: &str, attr: &str) -> bool {
    find_attr(tag, attr).is_some()
}

/// Value of an attribute on an opening tag, quoted or bare
pub(crate) fn attr_value(tag: &str, attr: &str) -> Option<String> {
    let found = find_attr(tag, attr)?;
    found.value.map(|range| tag[range].to_string())
}

/// Replace the whole attribute `attr` of `tag` (name and value) with `text`
pub(crate) fn replace_attr(html: &str, tag: &Match<'_>, attr: &Attr, text: &str) -> String {
    let start = tag.start() + attr.span.start;
    let end = tag.start() + attr.span.end;
    format!("{}{}{}", &html[..start], text, &html[end..])
}

/// Insert `text` into `html` at byte offset `pos`
pub(crate) fn insert_at(html: &str, pos: usize, text: &str) -> String {
    let mut out = String::with_capacity(html.len() + text.len());
    out.push_str(&html[..pos]);
    out.push_str(text);
    out.push_str(&html[pos..]);
    out
}

/// Insert `text` right after the tag name of `tag` (e.g. after `<img`)
pub(crate) fn insert_after_tag_name(
    html: &str,
    tag: &Match<'_>,
    name: &str,
    text: &str,
) -> String {
    insert_at(html, tag.start() + 1 + name.len(), text)
}

/// Insert `text` after the last attribute of `tag`, before `>` or `/>`
pub(crate) fn insert_before_tag_end(html: &str, tag: &Match<'_>, text: &str) -> String {
    let body = tag.as_str().trim_end_matches('>').trim_end_matches('/').trim_end();
    insert_at(html, tag.start() + body.len(), text)
}

/// Replace the byte range of `m` in `html` with `replacement`
pub(crate) fn replace_match(html: &str, m: &Match<'_>, replacement: &str) -> String {
    let mut out = String::with_capacity(html.len() + replacement.len());
    out.push_str(&html[..m.start()]);
    out.push_str(replacement);
    out.push_str(&html[m.end()..]);
    out
}

/// A snippet parsed as an HTML fragment, for element presence checks
pub(crate) struct Fragment {
    document: Html,
}

impl Fragment {
    pub(crate) fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_fragment(html),
        }
    }

    /// Whether any element matches the CSS selector
    pub(crate) fn contains(&self, selector: &str) -> bool {
        let selector = Selector::parse(selector).expect("valid selector");
        self.document.select(&selector).next().is_some()
    }

    /// Whether any element matching the selector has `attr` equal to `value`
    pub(crate) fn contains_with_attr(&self, selector: &str, attr: &str, value: &str) -> bool {
        let selector = Selector::parse(selector).expect("valid selector");
        self.document
            .select(&selector)
            .any(|el| el.value().attr(attr) == Some(value))
    }

    /// Whether the first element matching the selector sits inside an
    /// element named `ancestor`
    pub(crate) fn first_is_within(&self, selector: &str, ancestor: &str) -> bool {
        let selector = Selector::parse(selector).expect("valid selector");
        self.document.select(&selector).next().is_some_and(|el| {
            el.ancestors().any(|node| {
                node.value()
                    .as_element()
                    .is_some_and(|e| e.name() == ancestor)
            })
        })
    }
}
