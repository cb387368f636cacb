//! A single region table and the sort state it owns.

use crate::core::RecordSource;
use crate::error::ConfigurationError;
use crate::labels::LabelCatalog;
use crate::state::{self, SortState};
use crate::view::{self, HeaderViewModel, RowViewModel};

/// Everything the rendering layer needs for one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: Vec<HeaderViewModel>,
    pub rows: Vec<RowViewModel>,
    /// The ordering that was applied.
    pub effective_state: SortState,
}

/// A table instance.
///
/// Starts with the default ordering and only changes it through
/// [`activate_header`](RegionTable::activate_header). Tables share no state.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    sort_state: SortState,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort_state(sort_state: SortState) -> Self {
        Self { sort_state }
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort_state
    }

    /// Handles a click on the header of `column_id`.
    ///
    /// Unknown ids leave the state untouched and return an error.
    pub fn activate_header(&mut self, column_id: &str) -> Result<&SortState, ConfigurationError> {
        self.sort_state = state::activate_column_header(&self.sort_state, column_id)?;
        Ok(&self.sort_state)
    }

    pub fn headers(&self) -> Vec<HeaderViewModel> {
        view::headers(&self.sort_state)
    }

    /// Sorts and formats `records` under the current state.
    pub fn view<T, C>(&self, records: &T, catalog: &C) -> TableView
    where
        T: RecordSource + ?Sized,
        C: LabelCatalog + ?Sized,
    {
        let (rows, effective_state) = view::compute_view_model(records, &self.sort_state, catalog);
        TableView {
            headers: self.headers(),
            rows,
            effective_state,
        }
    }
}
