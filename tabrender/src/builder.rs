//! Table construction pipeline.
//!
//! Builds an element tree from table-shaped data in three uniform stages:
//! sections wrap rows, rows wrap cells, cells wrap values. Construction at
//! every stage returns `None` on zero children, and callers omit the
//! container instead of appending an empty one.

use tabledom::{Element, Tag};

use crate::config::TableConfig;
use crate::data::{Cell, Row, Section, TableData};
use crate::extract::{DefaultExtract, Extract};

pub struct TableBuilder<E: Extract = DefaultExtract> {
    config: TableConfig,
    extract: E,
}

impl TableBuilder<DefaultExtract> {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            extract: DefaultExtract,
        }
    }
}

impl<E: Extract> TableBuilder<E> {
    pub fn with_extract(config: TableConfig, extract: E) -> Self {
        Self { config, extract }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Build the table element for the supplied data.
    ///
    /// The data is never mutated; building the same value twice produces
    /// structurally equal trees.
    pub fn build(&self, data: &TableData) -> Element {
        let mut table = Element::table()
            .id(&self.config.table_id)
            .class(&self.config.class);

        let Some(tbody) = data.tbody.as_ref().filter(|section| !section.is_empty()) else {
            log::debug!("no body rows, rendering placeholder");
            return table.child(self.empty_body());
        };

        if let Some(header) = self.header(data.thead.as_ref()) {
            table = table.child(header);
        }
        if let Some(body) = self.body(tbody) {
            table = table.child(body);
        }
        if let Some(footer) = data.tfoot.as_ref().and_then(|section| self.footer(section)) {
            table = table.child(footer);
        }
        table
    }

    // -------------------------------------------------------------------------
    // Sections
    // -------------------------------------------------------------------------

    /// Header section: explicit header rows, a single row synthesized from
    /// the static headers when none are supplied, or nothing.
    fn header(&self, section: Option<&Section>) -> Option<Element> {
        let mut rows: Vec<Option<Element>> = match section {
            Some(section) => self
                .extract
                .header_rows(section)
                .into_iter()
                .map(|row| self.header_row(row))
                .collect(),
            None => Vec::new(),
        };
        if rows.is_empty() && !self.config.headers.is_empty() {
            rows.push(self.header_row(&Row::List(Vec::new())));
        }
        self.section_element(Tag::Thead, "head", rows)
    }

    fn body(&self, section: &Section) -> Option<Element> {
        let rows = self
            .extract
            .body_rows(section)
            .into_iter()
            .map(|row| self.body_row(row))
            .collect();
        self.section_element(Tag::Tbody, "body", rows)
    }

    fn footer(&self, section: &Section) -> Option<Element> {
        let rows = self
            .extract
            .footer_rows(section)
            .into_iter()
            .map(|row| self.footer_row(row))
            .collect();
        self.section_element(Tag::Tfoot, "foot", rows)
    }

    /// Wraps row elements in a section container, or nothing when no row
    /// produced an element.
    fn section_element(
        &self,
        tag: Tag,
        suffix: &str,
        rows: Vec<Option<Element>>,
    ) -> Option<Element> {
        let rows: Vec<Element> = rows.into_iter().flatten().collect();
        if rows.is_empty() {
            return None;
        }
        Some(
            Element::new(tag)
                .id(format!("{}-{}", self.config.table_id, suffix))
                .children(rows),
        )
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    fn header_row(&self, row: &Row) -> Option<Element> {
        let cells = self.extract.header_cells(row, &self.config.headers);
        self.row_element(cells.into_iter().map(|cell| self.header_cell(cell)).collect())
    }

    fn body_row(&self, row: &Row) -> Option<Element> {
        let cells = self.extract.body_cells(row, self.body_defaults());
        self.row_element(
            cells
                .into_iter()
                .map(|cell| self.data_cell(cell, false))
                .collect(),
        )
    }

    fn footer_row(&self, row: &Row) -> Option<Element> {
        let cells = self.extract.footer_cells(row, self.body_defaults());
        self.row_element(
            cells
                .into_iter()
                .map(|cell| self.data_cell(cell, true))
                .collect(),
        )
    }

    /// The static header prefix reaches body and footer extraction only
    /// when configured to.
    fn body_defaults(&self) -> &[String] {
        if self.config.headers_in_body {
            &self.config.headers
        } else {
            &[]
        }
    }

    fn row_element(&self, cells: Vec<Element>) -> Option<Element> {
        if cells.is_empty() {
            None
        } else {
            Some(Element::tr().children(cells))
        }
    }

    // -------------------------------------------------------------------------
    // Cells
    // -------------------------------------------------------------------------

    /// Header cells are column headers: `scope=col`, and click targets for
    /// the sort controller.
    fn header_cell(&self, cell: Cell) -> Element {
        self.cell_element(Element::th().attr("scope", "col").clickable(true), cell)
    }

    fn data_cell(&self, cell: Cell, footer: bool) -> Element {
        let base = if footer {
            Element::td().class("footer")
        } else {
            Element::td()
        };
        self.cell_element(base, cell)
    }

    /// Node-valued cells are inserted as-is; everything else becomes the
    /// cell's text content.
    fn cell_element(&self, base: Element, cell: Cell) -> Element {
        match cell {
            Cell::Node(node) => base.child(node),
            cell => {
                let text = self.extract.display_value(&cell, self.config.debug);
                base.text(text)
            }
        }
    }

    fn empty_body(&self) -> Element {
        Element::tbody()
            .id(format!("{}-body", self.config.table_id))
            .child(Element::tr().child(Element::td().text(&self.config.empty_text)))
    }
}
