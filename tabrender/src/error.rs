//! Error types for the data boundary.

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The supplied JSON does not fit the table-data shape.
    #[error("Table data parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
