//! The display query pipeline: filter/sort/paginate
//!
//! Pure with respect to the working set and the query state. The
//! pipeline is re-derived on every change rather than incrementally
//! maintained; display position is an output here, never an identity;
//! callers resolve rows through their ids.

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Row};

/// Rows per grid page
pub const PAGE_SIZE: usize = 50;

/// Sort polarity for a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Which column the grid is ordered by, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Header-click semantics: clicking the sorted column flips the
    /// direction, clicking a different column starts ascending.
    pub fn toggle(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.column = Some(column.to_string());
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Transient grid state: free-text filter, sort spec, current page.
/// Not persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub filter: String,
    pub sort: SortSpec,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort: SortSpec::default(),
            page_index: 0,
            page_size: PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Replace the filter text and snap back to the first page
    pub fn set_filter(&mut self, text: String) {
        self.filter = text;
        self.page_index = 0;
    }

    /// Toggle or replace the sort key and snap back to the first page
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort.toggle(column);
        self.page_index = 0;
    }
}

/// One page of derived display rows plus pagination metadata
#[derive(Debug)]
pub struct PageView<'a> {
    /// Rows on the current page, in display order. Each carries its
    /// stable id; callers resolve clicks through that id, never through
    /// the page position.
    pub rows: Vec<&'a Row>,
    pub page_index: usize,
    pub page_size: usize,
    /// `ceil(matching rows / page size)`; 0 when nothing matches
    pub total_pages: usize,
    /// Rows matching the filter, before pagination
    pub match_count: usize,
}

impl PageView<'_> {
    /// The view over no dataset at all
    pub fn empty() -> PageView<'static> {
        PageView {
            rows: Vec::new(),
            page_index: 0,
            page_size: PAGE_SIZE,
            total_pages: 0,
            match_count: 0,
        }
    }

    /// Index of the first row on this page within the filtered set
    pub fn offset(&self) -> usize {
        self.page_index * self.page_size
    }

    pub fn is_first_page(&self) -> bool {
        self.page_index == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.total_pages == 0 || self.page_index + 1 >= self.total_pages
    }
}

/// Keep rows where any data field contains `text`, case-insensitively.
/// Empty text keeps everything. Bookkeeping (id, mark) is not searched.
pub fn filter<'a>(dataset: &'a Dataset, text: &str) -> Vec<&'a Row> {
    if text.is_empty() {
        return dataset.rows().iter().collect();
    }

    let needle = text.to_lowercase();
    dataset
        .rows()
        .iter()
        .filter(|row| {
            row.values
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort by the spec's column; `None` (or an unknown column)
/// preserves the current order. Ties keep their relative input order.
pub fn sort(dataset: &Dataset, rows: &mut [&Row], spec: &SortSpec) {
    let Some(column) = spec.column.as_deref() else {
        return;
    };
    let Some(index) = dataset.column_index(column) else {
        return;
    };

    rows.sort_by(|a, b| {
        let ordering = a.value(index).cmp(b.value(index));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Slice out one page, clamped to the available rows
pub fn paginate(rows: Vec<&Row>, page_index: usize, page_size: usize) -> PageView<'_> {
    let page_size = page_size.max(1);
    let match_count = rows.len();
    let total_pages = match_count.div_ceil(page_size);

    let start = (page_index * page_size).min(match_count);
    let end = ((page_index + 1) * page_size).min(match_count);

    PageView {
        rows: rows[start..end].to_vec(),
        page_index,
        page_size,
        total_pages,
        match_count,
    }
}

/// Run the full pipeline in its fixed order: filter/sort/paginate
pub fn run<'a>(dataset: &'a Dataset, state: &QueryState) -> PageView<'a> {
    let mut rows = filter(dataset, &state.filter);
    sort(dataset, &mut rows, &state.sort);
    paginate(rows, state.page_index, state.page_size)
}
