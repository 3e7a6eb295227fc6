//! Core dataset value types
//!
//! A dataset is an ordered row collection sharing one column schema.
//! Rows carry a stable identity assigned at import/generation time;
//! display position changes constantly under filter/sort/paginate,
//! identity never does.

use serde::{Deserialize, Serialize};

/// Columns the grid renders and allows editing, in display order.
///
/// Imported datasets may carry extra columns; those are retained in the
/// data model and exported, but never rendered or edited.
pub const DISPLAY_COLUMNS: &[&str] = &["Title", "Author", "Genre", "PublishedYear", "ISBN"];

/// Stable row identity, assigned sequentially from 1 at import or
/// generation time and never reused or reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single data row: values positionally aligned with the owning
/// dataset's column schema, plus the sticky modification mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub values: Vec<String>,
    /// Set the first time any field diverges from baseline; never
    /// cleared except by a full reset.
    pub modified: bool,
}

impl Row {
    /// Create an unmodified row
    pub fn new(id: RowId, values: Vec<String>) -> Self {
        Self {
            id,
            values,
            modified: false,
        }
    }

    /// Get the value at a column index; out-of-range reads are empty
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }
}

/// An ordered sequence of rows sharing one column schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset from a column schema and rows.
    ///
    /// Rows are normalized to the schema width: short rows are filled
    /// with empty strings, surplus values are dropped.
    pub fn new(columns: Vec<String>, mut rows: Vec<Row>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.values.resize(width, String::new());
        }
        Self { columns, rows }
    }

    /// The column schema, in source order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Resolve a column name to its schema index
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All rows, in baseline order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Look up a row by its stable id
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Look up a row by its stable id, mutably
    pub fn row_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Get a cell value by row id and column name
    pub fn value(&self, id: RowId, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.row(id).map(|row| row.value(index))
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
