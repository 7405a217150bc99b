use std::fmt::Write as _;

use super::{Dropdown, ListView, RenderedView};

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders `view` as a standalone HTML page.
///
/// Element ids match the page the store's web front end uses: one
/// `<ul id="{category}-list">` per category and one `<select name="{field}">`
/// per build reference. Each item carries a `delete-btn` button with
/// `data-id` and `data-sheet` attributes.
pub fn to_page(view: &RenderedView) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Keyboard inventory</title>\n</head>\n<body>\n",
    );
    for list in &view.lists {
        write_list(&mut out, list);
    }
    if !view.dropdowns.is_empty() {
        out.push_str("<form id=\"create-keyboard-form\">\n");
        for dropdown in &view.dropdowns {
            write_dropdown(&mut out, dropdown);
        }
        out.push_str("</form>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn write_list(out: &mut String, list: &ListView) {
    let category = list.category;
    // Writing into a `String` cannot fail.
    let _ = writeln!(out, "<h2>{}</h2>", escape(category.sheet_name()));
    let _ = writeln!(out, "<ul id=\"{}\">", category.list_id());
    for item in &list.items {
        let _ = writeln!(
            out,
            "<li>{}<button class=\"delete-btn\" data-id=\"{}\" data-sheet=\"{}\">Delete</button></li>",
            escape(&item.label),
            escape(&item.delete.id.to_string()),
            escape(item.delete.category.sheet_name()),
        );
    }
    out.push_str("</ul>\n");
}

fn write_dropdown(out: &mut String, dropdown: &Dropdown) {
    let _ = writeln!(out, "<select name=\"{}\" required>", dropdown.field);
    for option in &dropdown.options {
        let _ = writeln!(
            out,
            "<option value=\"{}\">{}</option>",
            escape(&option.value.to_string()),
            escape(&option.label),
        );
    }
    out.push_str("</select>\n");
}
