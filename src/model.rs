//! Application model: the aggregate state the update layer mutates and
//! the display layer reads through derived accessors.

use crate::dataset::{Dataset, RowId, DISPLAY_COLUMNS};
use crate::query::{self, PageView, QueryState};
use crate::session::EditSession;
use crate::tracker::ChangeTracker;

/// Top-level engine state, one per editor session
#[derive(Debug, Default)]
pub struct AppModel {
    /// Baseline + working dataset pair; `None` until the first
    /// successful import or generation
    pub tracker: Option<ChangeTracker>,
    /// Transient grid state (filter, sort, page)
    pub query: QueryState,
    /// The in-progress cell edit, if any
    pub session: EditSession,
    /// An import or generation is pending with the host
    pub loading: bool,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The working dataset, if one is installed
    pub fn working(&self) -> Option<&Dataset> {
        self.tracker.as_ref().map(ChangeTracker::working)
    }

    /// Derive the current page through filter/sort/paginate
    pub fn page(&self) -> PageView<'_> {
        match &self.tracker {
            Some(tracker) => query::run(tracker.working(), &self.query),
            None => PageView::empty(),
        }
    }

    /// Columns the grid renders, in display order. Extra imported
    /// columns are retained and exported, never shown.
    pub fn display_columns(&self) -> &'static [&'static str] {
        DISPLAY_COLUMNS
    }

    /// A column is editable when the grid shows it and the dataset
    /// schema carries it
    pub fn is_editable_column(&self, column: &str) -> bool {
        DISPLAY_COLUMNS.contains(&column)
            && self
                .working()
                .is_some_and(|data| data.column_index(column).is_some())
    }

    /// Rows in the working set (the "Total" stat)
    pub fn row_count(&self) -> usize {
        self.working().map_or(0, Dataset::len)
    }

    /// Rows carrying the modification mark (the "Modified" stat)
    pub fn modified_count(&self) -> usize {
        self.tracker.as_ref().map_or(0, ChangeTracker::modified_count)
    }

    /// Per-cell highlight test against the baseline
    pub fn is_cell_modified(&self, row: RowId, column: &str) -> bool {
        self.tracker
            .as_ref()
            .is_some_and(|tracker| tracker.is_cell_modified(row, column))
    }
}
