// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form control fixes.

use super::{
    attr_value, find_attr, first_tag, insert_at, insert_before_tag_end, replace_attr, Fragment,
};

const DEFAULT_INPUT_ID: &str = "input-example";
const LABEL_PLACEHOLDER: &str = "Descriptive Label";

/// `label`: put a `<label for=...>` in front of an unlabeled `<input>`.
///
/// The input counts as labelled when a `<label for>` names its `id` or a
/// `<label>` wraps it. Reuses the input's `id` when it has one, otherwise
/// gives it `id="input-example"`, replacing an empty `id` in place.
pub fn fix_label(html: &str) -> Option<String> {
    let input = first_tag(html, "input")?;
    let id_attr = find_attr(input.as_str(), "id");
    let id = attr_value(input.as_str(), "id").filter(|id| !id.trim().is_empty());

    let fragment = Fragment::parse(html);
    let labelled_by_id = id
        .as_deref()
        .is_some_and(|id| fragment.contains_with_attr("label", "for", id));
    if labelled_by_id || fragment.first_is_within("input", "label") {
        return None;
    }

    let default_id = format!("id=\"{}\"", DEFAULT_INPUT_ID);
    let (patched, id) = match (id, id_attr) {
        (Some(id), _) => (html.to_string(), id),
        (None, Some(empty)) => (
            replace_attr(html, &input, &empty, &default_id),
            DEFAULT_INPUT_ID.to_string(),
        ),
        (None, None) => (
            insert_before_tag_end(html, &input, &format!(" {}", default_id)),
            DEFAULT_INPUT_ID.to_string(),
        ),
    };

    // Splicing the id happens after the tag start, so the offset still holds
    let label = format!("<label for=\"{}\">{}</label>\n", id, LABEL_PLACEHOLDER);
    Some(insert_at(&patched, input.start(), &label))
}
