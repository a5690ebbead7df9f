// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document structure fixes: lists, tables, page title, heading levels.

use super::{first_tag, has_attr, insert_after_tag_name, insert_at, replace_match, Fragment};
use regex::Regex;

const LIST_ITEM_PLACEHOLDER: &str = "<li>List item</li>";
const CAPTION_PLACEHOLDER: &str = "<caption>Table Caption</caption>";
const TITLE_PLACEHOLDER: &str = "<title>Page Title</title>";

/// `list` / `listitem`: give an empty `<ul>`/`<ol>` a list item
pub fn fix_list(html: &str) -> Option<String> {
    let list_re = Regex::new(r"(?i)<(?:ul|ol)\b[^>]*>").expect("valid regex");
    let list = list_re.find(html)?;

    if Fragment::parse(html).contains("li") {
        return None;
    }

    Some(insert_at(html, list.end(), LIST_ITEM_PLACEHOLDER))
}

/// Table rules: add a caption and promote the first row to header cells.
///
/// The two repairs are independent; either, both or neither may apply.
pub fn fix_table(html: &str) -> Option<String> {
    let table = first_tag(html, "table")?;
    let fragment = Fragment::parse(html);
    let mut out = html.to_string();

    if !fragment.contains("caption") {
        let opening = if has_attr(table.as_str(), "role") {
            table.as_str().to_string()
        } else {
            let tag = first_tag(table.as_str(), "table")?;
            insert_after_tag_name(table.as_str(), &tag, "table", " role=\"table\"")
        };
        out = format!(
            "{}{}{}{}",
            &html[..table.start()],
            opening,
            CAPTION_PLACEHOLDER,
            &html[table.end()..]
        );
    }

    if !fragment.contains("th") && !fragment.contains("thead") {
        out = promote_first_row(&out);
    }

    Some(out)
}

/// Turn the `<td>` cells of the first `<tr>` into `<th>` cells
fn promote_first_row(html: &str) -> String {
    let row_re = Regex::new(r"(?is)<tr\b[^>]*>.*?</tr\s*>").expect("valid regex");
    let Some(row) = row_re.find(html) else {
        return html.to_string();
    };

    let open_td = Regex::new(r"(?i)<td\b").expect("valid regex");
    let close_td = Regex::new(r"(?i)</td\s*>").expect("valid regex");
    let promoted = open_td.replace_all(row.as_str(), "<th");
    let promoted = close_td.replace_all(&promoted, "</th>");

    replace_match(html, &row, &promoted)
}

/// `document-title`: add a `<title>` right after `<head>`
pub fn fix_document_title(html: &str) -> Option<String> {
    let head = first_tag(html, "head")?;
    Some(insert_at(html, head.end(), TITLE_PLACEHOLDER))
}

/// `heading-order`: move the first heading below level 1 up one level
pub fn fix_heading_order(html: &str) -> Option<String> {
    let open_re = Regex::new(r"(?i)<h([1-6])\b[^>]*>").expect("valid regex");

    for caps in open_re.captures_iter(html) {
        let (Some(open), Some(level_match)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let level: u8 = match level_match.as_str().parse() {
            Ok(level) => level,
            Err(_) => continue,
        };
        if level <= 1 {
            continue;
        }
        let target = level - 1;

        // "<hN" is always three bytes
        let new_open = format!("<h{}{}", target, &open.as_str()[3..]);
        let mut out = replace_match(html, &open, &new_open);

        let close_re = Regex::new(&format!(r"(?i)</h{}\s*>", level)).expect("valid regex");
        let search_from = open.start() + new_open.len();
        if let Some(close) = close_re.find(&out[search_from..]) {
            let start = search_from + close.start();
            let end = search_from + close.end();
            out.replace_range(start..end, &format!("</h{}>", target));
        }

        return Some(out);
    }

    None
}
