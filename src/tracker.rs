//! Change tracking over a baseline/working dataset pair
//!
//! The baseline is an immutable snapshot taken when a dataset is
//! installed; edits apply to an independent working copy. Row marks are
//! sticky for the session: once a row diverges it stays marked until a
//! full reset, even if a later edit restores the original value.

use tracing::warn;

use crate::dataset::{Dataset, RowId};

/// Baseline snapshot plus the live working copy of a dataset
#[derive(Debug, Clone)]
pub struct ChangeTracker {
    baseline: Dataset,
    working: Dataset,
}

impl ChangeTracker {
    /// Install a dataset: the baseline snapshot and the working set are
    /// independent structural copies, so mutating one never affects the
    /// other.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            baseline: dataset.clone(),
            working: dataset,
        }
    }

    /// The immutable snapshot taken at install time
    pub fn baseline(&self) -> &Dataset {
        &self.baseline
    }

    /// The live, editable dataset
    pub fn working(&self) -> &Dataset {
        &self.working
    }

    /// Apply a single-cell edit to the working set, resolved by row id
    /// (never by display position).
    ///
    /// Returns true when the field actually changed. Unknown rows and
    /// columns are no-ops, as is a value equal to the current one; the
    /// row mark is untouched in every no-op case.
    pub fn commit_edit(&mut self, id: RowId, column: &str, new_value: &str) -> bool {
        let Some(index) = self.working.column_index(column) else {
            warn!("ignoring edit for unknown column {}", column);
            return false;
        };
        let Some(row) = self.working.row_mut(id) else {
            warn!("ignoring edit for unknown row {}", id);
            return false;
        };

        if row.value(index) == new_value {
            return false;
        }

        // rows from deserialized state may be narrower than the schema
        if row.values.len() <= index {
            row.values.resize(index + 1, String::new());
        }
        row.values[index] = new_value.to_string();
        row.modified = true;
        true
    }

    /// Per-cell highlight test: the row carries the mark AND this
    /// cell's working value differs from baseline. A marked row can
    /// still have unmarked cells when a different column was edited.
    pub fn is_cell_modified(&self, id: RowId, column: &str) -> bool {
        let Some(index) = self.working.column_index(column) else {
            return false;
        };
        let (Some(row), Some(base)) = (self.working.row(id), self.baseline.row(id)) else {
            return false;
        };

        row.modified && row.value(index) != base.value(index)
    }

    /// Replace the working set with a fresh copy of the baseline,
    /// clearing every modification mark.
    pub fn reset(&mut self) {
        self.working = self.baseline.clone();
    }

    /// Number of rows carrying the modification mark
    pub fn modified_count(&self) -> usize {
        self.working.rows().iter().filter(|row| row.modified).count()
    }
}
