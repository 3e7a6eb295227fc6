//! Single-cell edit session
//!
//! At most one cell is ever open for editing. Activating another cell
//! discards the open draft without committing it. This is deliberate
//! (no auto-save on switch), asserted by the editing tests.

use crate::dataset::RowId;

/// An in-progress edit of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEdit {
    pub row: RowId,
    pub column: String,
    /// Text under edit, seeded from the cell's working value
    pub draft: String,
    /// The working value at activation time, for dirty checks
    original: String,
}

impl ActiveEdit {
    /// Check if the draft diverged from the value captured at activation
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }
}

/// Idle/editing state machine for the grid's cell editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    active: Option<ActiveEdit>,
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        self.active.is_some()
    }

    /// The open edit, if any
    pub fn active(&self) -> Option<&ActiveEdit> {
        self.active.as_ref()
    }

    /// Check whether a specific cell is the one being edited
    pub fn is_editing_cell(&self, row: RowId, column: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|edit| edit.row == row && edit.column == column)
    }

    /// Open a cell for editing; any previously open draft is discarded
    pub fn begin(&mut self, row: RowId, column: String, current: String) {
        self.active = Some(ActiveEdit {
            row,
            column,
            draft: current.clone(),
            original: current,
        });
    }

    /// Replace the draft text; a no-op while idle
    pub fn set_draft(&mut self, text: String) {
        if let Some(edit) = &mut self.active {
            edit.draft = text;
        }
    }

    /// Close the session, yielding the edit for the tracker to apply
    pub fn take(&mut self) -> Option<ActiveEdit> {
        self.active.take()
    }

    /// Discard the draft without applying it
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
