//! Builder configuration.

/// Configuration for a table builder instance.
///
/// Collapses the constructor-argument variants of earlier designs into one
/// explicit object: element identity, the static header list, and the two
/// behavior switches.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Id of the produced `<table>`; section ids derive from it.
    pub table_id: String,
    /// Identifying class on the produced table.
    pub class: String,
    /// Static labels prepended to header-row cell extraction.
    pub headers: Vec<String>,
    /// When set, the static header prefix is applied to body and footer
    /// cell extraction as well.
    pub headers_in_body: bool,
    /// Pass sentinel values (null, NaN) through to display text instead of
    /// normalizing them to empty strings.
    pub debug: bool,
    /// Placeholder text for an empty or missing body.
    pub empty_text: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_id: "table".to_string(),
            class: "tabrender".to_string(),
            headers: Vec::new(),
            headers_in_body: false,
            debug: false,
            empty_text: "No results".to_string(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_id(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = table_id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn headers(mut self, headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn headers_in_body(mut self, headers_in_body: bool) -> Self {
        self.headers_in_body = headers_in_body;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn empty_text(mut self, empty_text: impl Into<String>) -> Self {
        self.empty_text = empty_text.into();
        self
    }
}
