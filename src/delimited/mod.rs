//! Delimited dataset codec
//!
//! The import/export boundary of the engine: `parse` turns raw
//! delimited text into a [`Dataset`](crate::dataset::Dataset),
//! `serialize` turns the working set back into text for download.
//!
//! The codec is deliberately naive rather than RFC 4180 compliant:
//! fields are split on the delimiter unconditionally, quotes are only
//! stripped (import) or wrapped (export), and nothing is escaped.
//! Round-trip fidelity is guaranteed only for values containing neither
//! the delimiter nor quote characters.

mod parser;
mod writer;

pub use parser::{parse, ParseError};
pub use writer::{export_filename, serialize};

/// Field delimiter for import and export
pub const DELIMITER: char = ',';

/// Quote character stripped on import and applied on export
pub const QUOTE: char = '"';
