use tabledom::{
    collect_clickable, find_element, find_element_mut, remove_all_children, Content, Element, Tag,
};

fn sample_table() -> Element {
    Element::table().id("t").child(
        Element::tbody().id("t-body").children([
            Element::tr()
                .id("r1")
                .child(Element::td().id("r1c1").text("a"))
                .child(Element::td().id("r1c2").text("1")),
            Element::tr()
                .id("r2")
                .child(Element::td().id("r2c1").text("b"))
                .child(Element::td().id("r2c2").text("2")),
        ]),
    )
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::td();
    let b = Element::td();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("td-"));
}

#[test]
fn test_tag_names() {
    assert_eq!(Tag::Table.name(), "table");
    assert_eq!(Tag::Thead.name(), "thead");
    assert_eq!(Tag::Th.name(), "th");
    assert_eq!(Tag::Span.name(), "span");
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::th().text("label").child(Element::span());
    assert_eq!(el.child_count(), 1);
}

#[test]
fn test_class_appends() {
    let el = Element::tr().class("total-row").class("highlight");
    assert!(el.has_class("total-row"));
    assert!(el.has_class("highlight"));
    assert!(!el.has_class("total"));
}

// ============================================================================
// Text content
// ============================================================================

#[test]
fn test_text_content_recurses() {
    let th = Element::th()
        .child(Element::span().text("Name"))
        .child(Element::span().class("arrow").text("▲"));
    assert_eq!(th.text_content(), "Name▲");
}

#[test]
fn test_text_content_empty() {
    assert_eq!(Element::td().text_content(), "");
}

// ============================================================================
// Tree search
// ============================================================================

#[test]
fn test_find_element() {
    let root = sample_table();
    assert!(find_element(&root, "r2c1").is_some());
    assert!(find_element(&root, "missing").is_none());
    assert_eq!(find_element(&root, "t").map(|e| e.tag), Some(Tag::Table));
}

#[test]
fn test_find_element_mut() {
    let mut root = sample_table();
    let cell = find_element_mut(&mut root, "r1c2").unwrap();
    cell.set_text("42");
    assert_eq!(find_element(&root, "r1c2").unwrap().text_content(), "42");
}

#[test]
fn test_collect_clickable_document_order() {
    let root = Element::table()
        .child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th().id("h1").clickable(true))
                    .child(Element::th().id("h2").clickable(true)),
            ),
        )
        .child(Element::tbody().child(Element::tr().child(Element::td().id("c1"))));

    assert_eq!(collect_clickable(&root), vec!["h1", "h2"]);
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_remove_all_children() {
    let mut root = sample_table();
    let body = find_element_mut(&mut root, "t-body").unwrap();
    remove_all_children(body);
    assert_eq!(body.child_count(), 0);
    assert!(body.content.is_none());
}

#[test]
fn test_append_child_moves_to_end() {
    let mut root = sample_table();
    let body = find_element_mut(&mut root, "t-body").unwrap();
    let rows = body.child_elements_mut();
    let first = rows.remove(0);
    rows.push(first);

    let order: Vec<&str> = body.child_elements().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, vec!["r2", "r1"]);
}

#[test]
fn test_attr_reconciliation() {
    let mut th = Element::th().attr("sort", "asc").min_width(12);
    th.remove_attr("sort");
    th.clear_min_width();
    assert_eq!(th.get_attr("sort"), None);
    assert_eq!(th.min_width, None);
}

#[test]
fn test_child_elements_mut_on_empty() {
    let mut el = Element::tbody();
    el.append_child(Element::tr().id("r"));
    assert!(matches!(el.content, Content::Children(_)));
    assert_eq!(el.child_count(), 1);
}
