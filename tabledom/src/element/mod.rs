mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the IDs of all clickable elements in document order.
pub fn collect_clickable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect_clickable_into(root, &mut ids);
    ids
}

fn collect_clickable_into(element: &Element, ids: &mut Vec<String>) {
    if element.clickable {
        ids.push(element.id.clone());
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_clickable_into(child, ids);
        }
    }
}

/// Remove all children of an element, leaving it empty.
pub fn remove_all_children(parent: &mut Element) {
    parent.content = Content::None;
}
