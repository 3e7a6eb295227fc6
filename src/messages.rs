//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::dataset::RowId;

/// Import and generation messages
#[derive(Debug, Clone)]
pub enum ImportMsg {
    /// User picked a file; ask the host to read it fully into memory
    FileRequested { path: PathBuf },
    /// File contents arrived from the host
    TextLoaded { text: String },
    /// The host failed to read the file
    LoadFailed { error: String },
    /// Generate a synthetic dataset; the seed is the injected
    /// randomness source (host entropy in production, fixed in tests)
    GenerateRequested { count: usize, seed: u64 },
}

/// Grid query messages (filter, sort, pagination)
#[derive(Debug, Clone)]
pub enum QueryMsg {
    /// Search box content changed
    FilterChanged(String),
    /// A column header was clicked
    SortColumnClicked(String),
    /// Advance one page (no-op on the last page)
    NextPage,
    /// Go back one page (no-op on the first page)
    PrevPage,
    /// Jump to a page (clamped into range)
    PageSelected(usize),
}

/// Cell editing messages
#[derive(Debug, Clone)]
pub enum EditMsg {
    /// A cell was activated for editing; any open draft is discarded
    CellActivated { row: RowId, column: String },
    /// The draft text changed
    DraftChanged(String),
    /// Commit the draft to the working set
    Commit,
    /// Discard the draft
    Cancel,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Import(ImportMsg),
    Query(QueryMsg),
    Edit(EditMsg),
    /// Restore the working set to the baseline snapshot
    ResetAll,
    /// Serialize the working set for download
    ExportRequested,
}
