// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fixes for text alternatives and perceivable content:
//! image alt text, button and link names, color contrast.

use super::{
    elements, find_attr, first_tag, has_attr, insert_after_tag_name, insert_at, replace_attr,
    tag_regex,
};
use regex::Regex;

const ALT_PLACEHOLDER: &str = "Descriptive alt text";
const BUTTON_PLACEHOLDER: &str = "Button Label";
const LINK_PLACEHOLDER: &str = "Descriptive Link Text";

/// Declarations giving black-on-white text (21:1)
const CONTRAST_DECLARATIONS: &str = "color: #000000; background-color: #ffffff;";
const CONTRAST_NOTE: &str = "<!-- Ensure a contrast ratio of at least 4.5:1 between text and background -->";

/// `image-alt`: give the first unlabeled `<img>` placeholder alt text.
///
/// An `alt` with no value, or an empty one, is replaced in place.
pub fn fix_image_alt(html: &str) -> Option<String> {
    let img_re = tag_regex("img");
    let placeholder = format!("alt=\"{}\"", ALT_PLACEHOLDER);

    if let Some(tag) = img_re.find_iter(html).find(|t| !has_attr(t.as_str(), "alt")) {
        return Some(insert_after_tag_name(html, &tag, "img", &format!(" {}", placeholder)));
    }

    let fixed = img_re.find_iter(html).find_map(|tag| {
        let alt = find_attr(tag.as_str(), "alt")?;
        let empty = alt.value.as_ref().map_or(true, |range| range.is_empty());
        empty.then(|| replace_attr(html, &tag, &alt, &placeholder))
    });
    fixed
}

/// `button-name`: fill an empty, unlabeled `<button>` with placeholder text.
///
/// Buttons with any content are left alone, even if that content is
/// not a usable name.
pub fn fix_button_name(html: &str) -> Option<String> {
    let re = Regex::new(r"(?is)(<button\b[^>]*>)(.*?)(</button\s*>)").expect("valid regex");
    let caps = re.captures(html)?;
    let open = caps.get(1)?;
    let inner = caps.get(2)?;

    if has_attr(open.as_str(), "aria-label") || !inner.as_str().trim().is_empty() {
        return None;
    }

    Some(format!(
        "{}{}{}",
        &html[..inner.start()],
        BUTTON_PLACEHOLDER,
        &html[inner.end()..]
    ))
}

/// `color-contrast`: force high-contrast colors onto the element.
///
/// The first element with an inline `style` gets the declarations
/// prepended; otherwise the first element gets a new `style` attribute.
pub fn fix_color_contrast(html: &str) -> Option<String> {
    let tags = elements(html);

    let styled = tags
        .iter()
        .find_map(|(tag, _)| find_attr(tag.as_str(), "style").map(|style| (tag, style)));

    if let Some((tag, style)) = styled {
        let existing = style
            .value
            .as_ref()
            .map(|range| &tag.as_str()[range.clone()])
            .unwrap_or("");
        let declarations = if existing.is_empty() {
            CONTRAST_DECLARATIONS.to_string()
        } else {
            format!("{} ", CONTRAST_DECLARATIONS)
        };

        return Some(match &style.value {
            Some(range) if style.quoted => {
                insert_at(html, tag.start() + range.start, &declarations)
            }
            _ => replace_attr(
                html,
                tag,
                &style,
                &format!("style=\"{}{}\"", declarations, existing),
            ),
        });
    }

    if let Some((tag, name)) = tags.first() {
        return Some(insert_after_tag_name(
            html,
            tag,
            name,
            &format!(" style=\"{}\"", CONTRAST_DECLARATIONS),
        ));
    }

    Some(format!("{}{}", CONTRAST_NOTE, html))
}

/// `link-name`: give an empty anchor text, or an unlabeled one an aria-label
pub fn fix_link_name(html: &str) -> Option<String> {
    let re = Regex::new(r"(?is)(<a\b[^>]*>)(.*?)(</a\s*>)").expect("valid regex");

    if let Some(caps) = re.captures(html) {
        let inner = caps.get(2)?;
        if inner.as_str().trim().is_empty() {
            return Some(format!(
                "{}{}{}",
                &html[..inner.start()],
                LINK_PLACEHOLDER,
                &html[inner.end()..]
            ));
        }
    }

    let open = first_tag(html, "a")?;
    if has_attr(open.as_str(), "aria-label") {
        return None;
    }
    Some(insert_after_tag_name(
        html,
        &open,
        "a",
        &format!(" aria-label=\"{}\"", LINK_PLACEHOLDER),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_alt_inserted_after_tag_name() {
        let fixed = fix_image_alt(r#"<img src="logo.png">"#).unwrap();
        assert_eq!(fixed, r#"<img alt="Descriptive alt text" src="logo.png">"#);
    }

    #[test]
    fn test_empty_alt_replaced() {
        let fixed = fix_image_alt(r#"<img src="logo.png" alt="">"#).unwrap();
        assert_eq!(fixed, r#"<img src="logo.png" alt="Descriptive alt text">"#);

        let fixed = fix_image_alt("<img src='logo.png' alt=''>").unwrap();
        assert_eq!(fixed, r#"<img src='logo.png' alt="Descriptive alt text">"#);
    }

    #[test]
    fn test_valueless_alt_replaced() {
        let fixed = fix_image_alt(r#"<img src="a.png" alt>"#).unwrap();
        assert_eq!(fixed, r#"<img src="a.png" alt="Descriptive alt text">"#);

        let fixed = fix_image_alt(r#"<img alt src="a.png"/>"#).unwrap();
        assert_eq!(fixed, r#"<img alt="Descriptive alt text" src="a.png"/>"#);
    }

    #[test]
    fn test_described_image_untouched() {
        assert!(fix_image_alt(r#"<img src="a.png" alt="Sales chart">"#).is_none());
        assert!(fix_image_alt("<p>no image</p>").is_none());
    }

    #[test]
    fn test_second_image_fixed_when_first_has_alt() {
        let fixed = fix_image_alt(r#"<img src="a.png" alt="A"><img src="b.png">"#).unwrap();
        assert_eq!(
            fixed,
            r#"<img src="a.png" alt="A"><img alt="Descriptive alt text" src="b.png">"#
        );
    }

    #[test]
    fn test_empty_button_gets_label() {
        assert_eq!(
            fix_button_name("<button></button>").unwrap(),
            "<button>Button Label</button>"
        );
        assert_eq!(
            fix_button_name("<button class=\"icon\">  </button>").unwrap(),
            "<button class=\"icon\">Button Label</button>"
        );
    }

    #[test]
    fn test_button_with_content_or_aria_label_untouched() {
        assert!(fix_button_name("<button>x</button>").is_none());
        assert!(fix_button_name("<button><span class=\"icon\"></span></button>").is_none());
        assert!(fix_button_name("<button aria-label=\"Close\"></button>").is_none());
    }

    #[test]
    fn test_contrast_prepends_to_existing_style() {
        let fixed = fix_color_contrast("<p style='color:#aaa; background:#fff'>Low</p>").unwrap();
        assert_eq!(
            fixed,
            "<p style='color: #000000; background-color: #ffffff; color:#aaa; background:#fff'>Low</p>"
        );
    }

    #[test]
    fn test_contrast_fills_empty_style() {
        let fixed = fix_color_contrast(r#"<p style="">Low</p>"#).unwrap();
        assert_eq!(fixed, r#"<p style="color: #000000; background-color: #ffffff;">Low</p>"#);
    }

    #[test]
    fn test_contrast_injects_style_into_first_tag() {
        let fixed = fix_color_contrast(r#"<span class="muted">Low</span>"#).unwrap();
        assert_eq!(
            fixed,
            r#"<span style="color: #000000; background-color: #ffffff;" class="muted">Low</span>"#
        );
    }

    #[test]
    fn test_contrast_ignores_style_text_inside_other_values() {
        let fixed = fix_color_contrast(r#"<p title='uses style="x"'>x</p>"#).unwrap();
        assert_eq!(
            fixed,
            r#"<p style="color: #000000; background-color: #ffffff;" title='uses style="x"'>x</p>"#
        );

        let fixed = fix_color_contrast("<p>Set style=\"x\" here</p>").unwrap();
        assert_eq!(
            fixed,
            "<p style=\"color: #000000; background-color: #ffffff;\">Set style=\"x\" here</p>"
        );
    }

    #[test]
    fn test_contrast_uses_style_on_later_element() {
        let fixed = fix_color_contrast(r#"<div><span style="color:#ccc">Low</span></div>"#).unwrap();
        assert_eq!(
            fixed,
            r#"<div><span style="color: #000000; background-color: #ffffff; color:#ccc">Low</span></div>"#
        );
    }

    #[test]
    fn test_contrast_quotes_unquoted_style() {
        let fixed = fix_color_contrast("<p style=color:#aaa>Low</p>").unwrap();
        assert_eq!(
            fixed,
            r#"<p style="color: #000000; background-color: #ffffff; color:#aaa">Low</p>"#
        );
    }

    #[test]
    fn test_contrast_without_tag_gets_note() {
        let fixed = fix_color_contrast("Low contrast text").unwrap();
        assert!(fixed.starts_with("<!--"));
        assert!(fixed.contains("4.5:1"));
        assert!(fixed.ends_with("Low contrast text"));
    }

    #[test]
    fn test_empty_link_gets_text() {
        assert_eq!(
            fix_link_name(r#"<a href="/home"></a>"#).unwrap(),
            r#"<a href="/home">Descriptive Link Text</a>"#
        );
    }

    #[test]
    fn test_link_without_aria_label_gets_one() {
        assert_eq!(
            fix_link_name(r#"<a href="/home"><img src="home.png"></a>"#).unwrap(),
            r#"<a aria-label="Descriptive Link Text" href="/home"><img src="home.png"></a>"#
        );
    }

    #[test]
    fn test_labelled_link_untouched() {
        assert!(fix_link_name(r#"<a href="/" aria-label="Home"><svg></svg></a>"#).is_none());
        assert!(fix_link_name("<abbr>HTML</abbr>").is_none());
    }
}
