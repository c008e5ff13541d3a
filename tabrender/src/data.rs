//! Input data model for table construction.
//!
//! Sections and rows come in two shapes: ordered maps (insertion order) and
//! lists (index order). Both normalize to ordered sequences at the
//! extraction boundary; nothing downstream cares which shape was supplied.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tabledom::Element;

use crate::error::DataError;

/// A single value at a row/column intersection.
///
/// Primitive cells are stringified for display; `Node` cells are inserted
/// into the produced tree as-is and can only be constructed in code.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Node(Element),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<Element> for Cell {
    fn from(value: Element) -> Self {
        Cell::Node(value)
    }
}

/// One horizontal record within a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    List(Vec<Cell>),
    Map(IndexMap<String, Cell>),
}

impl Row {
    /// Cell values in column order.
    pub fn values(&self) -> Vec<&Cell> {
        match self {
            Row::List(cells) => cells.iter().collect(),
            Row::Map(cells) => cells.values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Row::List(cells) => cells.len(),
            Row::Map(cells) => cells.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One structural zone of a table (header, body or footer).
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    List(Vec<Row>),
    Map(IndexMap<String, Row>),
}

impl Section {
    /// Rows in document order.
    pub fn rows(&self) -> Vec<&Row> {
        match self {
            Section::List(rows) => rows.iter().collect(),
            Section::Map(rows) => rows.values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Section::List(rows) => rows.len(),
            Section::Map(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The table-shaped input value. Unknown keys in the source JSON are
/// ignored; a missing or empty `tbody` renders as the placeholder table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub thead: Option<Section>,
    #[serde(default)]
    pub tbody: Option<Section>,
    #[serde(default)]
    pub tfoot: Option<Section>,
}

impl TableData {
    pub fn from_json(input: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(input)?)
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CellVisitor;

        impl<'de> Visitor<'de> for CellVisitor {
            type Value = Cell;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a string, number, boolean or null")
            }

            fn visit_str<E>(self, v: &str) -> Result<Cell, E>
            where
                E: de::Error,
            {
                Ok(Cell::Text(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Cell, E>
            where
                E: de::Error,
            {
                Ok(Cell::Text(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Cell, E>
            where
                E: de::Error,
            {
                Ok(Cell::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Cell, E>
            where
                E: de::Error,
            {
                match i64::try_from(v) {
                    Ok(v) => Ok(Cell::Int(v)),
                    Err(_) => Ok(Cell::Float(v as f64)),
                }
            }

            fn visit_f64<E>(self, v: f64) -> Result<Cell, E>
            where
                E: de::Error,
            {
                Ok(Cell::Float(v))
            }

            fn visit_bool<E>(self, v: bool) -> Result<Cell, E>
            where
                E: de::Error,
            {
                Ok(Cell::Bool(v))
            }

            fn visit_unit<E>(self) -> Result<Cell, E>
            where
                E: de::Error,
            {
                Ok(Cell::Null)
            }

            fn visit_none<E>(self) -> Result<Cell, E>
            where
                E: de::Error,
            {
                Ok(Cell::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Cell, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(CellVisitor)
            }
        }

        deserializer.deserialize_any(CellVisitor)
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence or map of cell values")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Row, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut cells = Vec::new();
                while let Some(cell) = seq.next_element::<Cell>()? {
                    cells.push(cell);
                }
                Ok(Row::List(cells))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Row, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut cells = IndexMap::new();
                while let Some((key, cell)) = map.next_entry::<String, Cell>()? {
                    cells.insert(key, cell);
                }
                Ok(Row::Map(cells))
            }
        }

        deserializer.deserialize_any(RowVisitor)
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = Section;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence or map of rows")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Section, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut rows = Vec::new();
                while let Some(row) = seq.next_element::<Row>()? {
                    rows.push(row);
                }
                Ok(Section::List(rows))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Section, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rows = IndexMap::new();
                while let Some((key, row)) = map.next_entry::<String, Row>()? {
                    rows.insert(key, row);
                }
                Ok(Section::Map(rows))
            }
        }

        deserializer.deserialize_any(SectionVisitor)
    }
}
