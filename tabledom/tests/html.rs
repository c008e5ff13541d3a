use tabledom::{escape_html, write_element, Element};

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
    assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
    assert_eq!(escape_html("it's"), "it&#39;s");
    assert_eq!(escape_html("plain"), "plain");
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_write_text_element() {
    let td = Element::td().id("c").text("value");
    assert_eq!(write_element(&td), r#"<td id="c">value</td>"#);
}

#[test]
fn test_write_nested() {
    let tr = Element::tr()
        .id("r")
        .child(Element::td().id("c1").text("a"))
        .child(Element::td().id("c2").text("b"));
    assert_eq!(
        write_element(&tr),
        r#"<tr id="r"><td id="c1">a</td><td id="c2">b</td></tr>"#
    );
}

#[test]
fn test_attributes_sorted_after_id() {
    let th = Element::th()
        .id("h")
        .attr("sort", "asc")
        .attr("scope", "col");
    assert_eq!(
        write_element(&th),
        r#"<th id="h" scope="col" sort="asc"></th>"#
    );
}

#[test]
fn test_min_width_written_as_inline_style() {
    let th = Element::th().id("h").min_width(14);
    assert_eq!(
        write_element(&th),
        r#"<th id="h" style="min-width: 14ch"></th>"#
    );
}

#[test]
fn test_text_is_escaped() {
    let td = Element::td().id("c").text("<script>");
    assert_eq!(write_element(&td), r#"<td id="c">&lt;script&gt;</td>"#);
}

#[test]
fn test_same_tree_same_markup() {
    let build = || {
        Element::table().id("t").child(
            Element::tbody()
                .id("t-body")
                .child(Element::tr().id("r").child(Element::td().id("c").text("x"))),
        )
    };
    assert_eq!(write_element(&build()), write_element(&build()));
}
