// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA role fixes.

use super::{elements, find_attr, insert_after_tag_name, replace_attr};

/// `aria-roles`: replace an invalid role with `region`, or add a role to
/// a bare `<div>` / `<span>`
pub fn fix_aria_roles(html: &str) -> Option<String> {
    let tags = elements(html);

    let with_role = tags
        .iter()
        .find_map(|(tag, _)| find_attr(tag.as_str(), "role").map(|role| (tag, role)));
    if let Some((tag, role)) = with_role {
        return Some(replace_attr(html, tag, &role, "role=\"region\""));
    }

    let (tag, name) = tags.first()?;
    let role = match name.as_str() {
        "div" => "region",
        "span" => "text",
        _ => return None,
    };
    Some(insert_after_tag_name(html, tag, name, &format!(" role=\"{}\"", role)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_role_replaced() {
        assert_eq!(
            fix_aria_roles(r#"<div role="banana">x</div>"#).unwrap(),
            r#"<div role="region">x</div>"#
        );
        assert_eq!(
            fix_aria_roles("<li role='menuitemx'>x</li>").unwrap(),
            r#"<li role="region">x</li>"#
        );
    }

    #[test]
    fn test_div_and_span_get_roles() {
        assert_eq!(
            fix_aria_roles(r#"<div class="panel">x</div>"#).unwrap(),
            r#"<div role="region" class="panel">x</div>"#
        );
        assert_eq!(
            fix_aria_roles("<span>x</span>").unwrap(),
            r#"<span role="text">x</span>"#
        );
    }

    #[test]
    fn test_role_text_outside_attributes_ignored() {
        assert!(fix_aria_roles("<p>Set role=x here</p>").is_none());
        assert_eq!(
            fix_aria_roles("<div title=\"role=x\">Set role=x here</div>").unwrap(),
            "<div role=\"region\" title=\"role=x\">Set role=x here</div>"
        );
    }

    #[test]
    fn test_role_on_nested_element_replaced() {
        assert_eq!(
            fix_aria_roles(r#"<section><ul role=menu><li>a</li></ul></section>"#).unwrap(),
            r#"<section><ul role="region"><li>a</li></ul></section>"#
        );
    }

    #[test]
    fn test_other_elements_untouched() {
        assert!(fix_aria_roles("<p>x</p>").is_none());
        assert!(fix_aria_roles("plain").is_none());
    }
}
