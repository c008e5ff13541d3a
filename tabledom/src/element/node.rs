use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The markup vocabulary this model emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Table,
    Thead,
    Tbody,
    Tfoot,
    Tr,
    Th,
    Td,
    Span,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tfoot => "tfoot",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Span => "span",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Attributes (sort state, class markers, scope all live here)
    pub attrs: HashMap<String, String>,

    // Inline sizing override, in display columns
    pub min_width: Option<u16>,

    // Interaction
    pub clickable: bool,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            content: Content::None,
            attrs: HashMap::new(),
            min_width: None,
            clickable: false,
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::Thead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::Tbody)
    }

    pub fn tfoot() -> Self {
        Self::new(Tag::Tfoot)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th() -> Self {
        Self::new(Tag::Th)
    }

    pub fn td() -> Self {
        Self::new(Tag::Td)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Add a class, appending to any classes already present.
    pub fn class(mut self, name: &str) -> Self {
        match self.attrs.get_mut("class") {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(name);
            }
            None => {
                self.attrs.insert("class".to_string(), name.to_string());
            }
        }
        self
    }

    // Layout
    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Read accessors

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == name))
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => {
                children.iter().map(Element::text_content).collect()
            }
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_count(&self) -> usize {
        self.child_elements().len()
    }

    // Mutators (in-place reordering and attribute reconciliation)

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn remove_attr(&mut self, key: &str) {
        self.attrs.remove(key);
    }

    pub fn set_min_width(&mut self, min_width: u16) {
        self.min_width = Some(min_width);
    }

    pub fn clear_min_width(&mut self) {
        self.min_width = None;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Mutable access to the child list. Non-children content is replaced
    /// by an empty child list.
    pub fn child_elements_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self.content, Content::Children(_)) {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => children,
            _ => unreachable!(),
        }
    }

    pub fn append_child(&mut self, child: Element) {
        self.child_elements_mut().push(child);
    }
}
