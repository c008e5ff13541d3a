//! HTML serialization for element trees.

use crate::element::{Content, Element};

/// Escapes a string for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serializes an element tree to markup text.
///
/// The `id` attribute is written first and the remaining attributes in
/// sorted order, so two structurally equal trees produce identical output.
pub fn write_element(element: &Element) -> String {
    let mut out = String::new();
    write_into(element, &mut out);
    out
}

fn write_into(element: &Element, out: &mut String) {
    let tag = element.tag.name();

    out.push('<');
    out.push_str(tag);
    out.push_str(&format!(r#" id="{}""#, escape_html(&element.id)));

    let mut keys: Vec<&String> = element.attrs.keys().collect();
    keys.sort();
    for key in keys {
        let value = &element.attrs[key];
        out.push_str(&format!(r#" {}="{}""#, key, escape_html(value)));
    }

    if let Some(width) = element.min_width {
        out.push_str(&format!(r#" style="min-width: {width}ch""#));
    }

    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_html(text)),
        Content::Children(children) => {
            for child in children {
                write_into(child, out);
            }
        }
    }

    out.push_str(&format!("</{tag}>"));
}
