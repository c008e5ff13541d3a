//! Row and cell extraction capability.
//!
//! The builder walks sections and rows through this trait, so an
//! implementation can reorder or inject columns without touching the
//! traversal logic. Every method is a pure function from raw data to an
//! ordered sequence; implementers override only what they need.

use crate::data::{Cell, Row, Section};

pub trait Extract {
    /// Rows for the header section, in display order.
    fn header_rows<'a>(&self, section: &'a Section) -> Vec<&'a Row> {
        section.rows()
    }

    /// Rows for the body section, in display order.
    fn body_rows<'a>(&self, section: &'a Section) -> Vec<&'a Row> {
        section.rows()
    }

    /// Rows for the footer section, in display order.
    fn footer_rows<'a>(&self, section: &'a Section) -> Vec<&'a Row> {
        section.rows()
    }

    /// Cell values for a header row. `defaults` is the static header
    /// prefix; the builder decides which sections receive it.
    fn header_cells(&self, row: &Row, defaults: &[String]) -> Vec<Cell> {
        prefixed(row, defaults)
    }

    /// Cell values for a body row.
    fn body_cells(&self, row: &Row, defaults: &[String]) -> Vec<Cell> {
        prefixed(row, defaults)
    }

    /// Cell values for a footer row.
    fn footer_cells(&self, row: &Row, defaults: &[String]) -> Vec<Cell> {
        prefixed(row, defaults)
    }

    /// Display text for a primitive cell value.
    ///
    /// Sentinels (null, NaN) normalize to the empty string unless `debug`
    /// is set, in which case they pass through for diagnostic visibility.
    fn display_value(&self, cell: &Cell, debug: bool) -> String {
        match cell {
            Cell::Text(text) => text.clone(),
            Cell::Int(value) => value.to_string(),
            Cell::Float(value) if value.is_nan() => {
                if debug {
                    "NaN".to_string()
                } else {
                    String::new()
                }
            }
            Cell::Float(value) => value.to_string(),
            Cell::Bool(value) => value.to_string(),
            Cell::Null => {
                if debug {
                    "null".to_string()
                } else {
                    String::new()
                }
            }
            Cell::Node(node) => node.text_content(),
        }
    }
}

fn prefixed(row: &Row, defaults: &[String]) -> Vec<Cell> {
    defaults
        .iter()
        .map(|label| Cell::Text(label.clone()))
        .chain(row.values().into_iter().cloned())
        .collect()
}

/// The extraction used when no override is supplied: natural order, static
/// headers ahead of header-row values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtract;

impl Extract for DefaultExtract {}
