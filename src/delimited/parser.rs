//! Delimited text parsing
//!
//! Naive split-on-comma parsing: fields are trimmed and stripped of one
//! surrounding quote pair, short rows are filled with empty strings,
//! surplus values are dropped. Embedded delimiters and quotes are not
//! interpreted. This leniency is the import contract, not a defect.

use super::{DELIMITER, QUOTE};
use crate::dataset::{Dataset, Row, RowId};

/// Error type for dataset parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dataset parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse delimited text into a dataset.
///
/// Lines that are empty after trimming are skipped. The first remaining
/// line is the header and defines the column schema; every later line
/// becomes one row, its values mapped positionally to the headers. Row
/// ids are assigned sequentially from 1.
///
/// Fails only when the input contains no non-empty lines; a header-only
/// input parses to a dataset with zero rows.
pub fn parse(text: &str) -> Result<Dataset, ParseError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().ok_or_else(|| ParseError {
        message: "input contains no header line".to_string(),
    })?;
    let columns = split_fields(header);

    let rows = lines
        .enumerate()
        .map(|(index, line)| Row::new(RowId(index as u64 + 1), split_fields(line)))
        .collect();

    Ok(Dataset::new(columns, rows))
}

/// Split one line into cleaned field values
fn split_fields(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(clean_field).collect()
}

/// Trim whitespace and strip one surrounding quote pair
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(QUOTE)
        .and_then(|inner| inner.strip_suffix(QUOTE))
        .unwrap_or(trimmed)
        .to_string()
}
