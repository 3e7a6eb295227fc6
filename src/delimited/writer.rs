//! Dataset serialization
//!
//! The export side of the codec: the header line is emitted unquoted,
//! every value is wrapped in quotes unconditionally, and nothing is
//! escaped. The import side's quote stripping makes the pair round-trip
//! for values free of delimiters and quotes.

use chrono::NaiveDate;

use super::{DELIMITER, QUOTE};
use crate::dataset::Dataset;

/// Serialize a dataset back to delimited text, header first, lines
/// joined with a single newline. A dataset with no rows serializes to
/// the empty string.
pub fn serialize(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return String::new();
    }

    let delimiter = DELIMITER.to_string();
    let mut lines = Vec::with_capacity(dataset.len() + 1);
    lines.push(dataset.columns().join(&delimiter));

    for row in dataset.rows() {
        let fields: Vec<String> = (0..dataset.columns().len())
            .map(|index| format!("{QUOTE}{}{QUOTE}", row.value(index)))
            .collect();
        lines.push(fields.join(&delimiter));
    }

    lines.join("\n")
}

/// Export filename for a given date: `edited_books_<ISO-date>.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("edited_books_{}.csv", date.format("%Y-%m-%d"))
}
