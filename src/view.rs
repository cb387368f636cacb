//! Display-ready rows and headers.
//!
//! [`build_rows`] formats already sorted records column by column, in registry
//! order. [`compute_view_model`] is the full pipeline: resolve the effective sort
//! state, sort, then format. Nothing here mutates its inputs.

use crate::algo;
use crate::columns::{self, ColumnDef, ColumnId};
use crate::core::{RecordSource, Region, Value};
use crate::error::LabelLookupError;
use crate::labels::{self, LabelCatalog};
use crate::state::{Direction, SortState};
use serde::Serialize;

/// One rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub column: ColumnId,
    /// Rendered text, or the label lookup that failed for it.
    pub text: Result<String, LabelLookupError>,
}

impl Cell {
    /// Rendered text, falling back to the unresolved label identifier.
    pub fn display(&self) -> &str {
        match &self.text {
            Ok(text) => text,
            Err(err) => err.identifier(),
        }
    }
}

/// A formatted row: one [`Cell`] per registered column, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowViewModel {
    cells: Vec<Cell>,
}

impl RowViewModel {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, column: ColumnId) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.column == column)
    }

    /// Successfully rendered text of a column.
    pub fn text(&self, column: ColumnId) -> Option<&str> {
        self.cell(column).and_then(|cell| cell.text.as_deref().ok())
    }

    /// `true` if any cell failed to resolve its label.
    pub fn has_errors(&self) -> bool {
        self.cells.iter().any(|cell| cell.text.is_err())
    }
}

/// Sort affordance of a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIndicator {
    /// Header cannot be activated.
    NotSortable,
    /// Sortable but not part of the current ordering.
    Unsorted,
    Ascending,
    Descending,
}

/// Column metadata for building table headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderViewModel {
    pub id: ColumnId,
    pub label_key: &'static str,
    pub sortable: bool,
    pub indicator: SortIndicator,
}

/// Headers for all columns, with indicators taken from the effective state.
pub fn headers(state: &SortState) -> Vec<HeaderViewModel> {
    let effective = state.effective();
    columns::iter()
        .map(|column| HeaderViewModel {
            id: column.id,
            label_key: column.label_key,
            sortable: column.sortable,
            indicator: indicator(column, &effective),
        })
        .collect()
}

fn indicator(column: &ColumnDef, effective: &SortState) -> SortIndicator {
    if !column.sortable {
        return SortIndicator::NotSortable;
    }
    match effective.direction_of(column.id) {
        Some(Direction::Ascending) => SortIndicator::Ascending,
        Some(Direction::Descending) => SortIndicator::Descending,
        None => SortIndicator::Unsorted,
    }
}

/// Renders a percentage change with an explicit `+` for positive values.
///
/// ```
/// use region_table::view::format_percentage;
///
/// assert_eq!(format_percentage(5.0), "+5%");
/// assert_eq!(format_percentage(0.0), "0%");
/// assert_eq!(format_percentage(-3.0), "-3%");
/// ```
pub fn format_percentage(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{}%", Value::Number(value))
}

fn format_cell<C: LabelCatalog + ?Sized>(
    column: &ColumnDef,
    region: &Region,
    catalog: &C,
) -> Result<String, LabelLookupError> {
    match column.id {
        ColumnId::Name => {
            let identifier = labels::region_identifier(&region.name);
            catalog.lookup(&identifier).map(str::to_owned).inspect_err(|err| {
                log::warn!("region '{}': {}", region.name, err);
            })
        }
        ColumnId::Percentage => Ok(format_percentage(region.percentage)),
        _ => Ok(column.value(region).to_string()),
    }
}

/// Formats sorted records into rows.
pub fn build_rows<'a, I, C>(sorted: I, catalog: &C) -> Vec<RowViewModel>
where
    I: IntoIterator<Item = &'a Region>,
    C: LabelCatalog + ?Sized,
{
    sorted
        .into_iter()
        .map(|region| RowViewModel {
            cells: columns::iter()
                .map(|column| Cell {
                    column: column.id,
                    text: format_cell(column, region, catalog),
                })
                .collect(),
        })
        .collect()
}

/// Sorts and formats `records` under `state`.
///
/// Returns the rows together with the state that was actually applied, which is
/// the default ordering when `state` is empty.
pub fn compute_view_model<T, C>(
    records: &T,
    state: &SortState,
    catalog: &C,
) -> (Vec<RowViewModel>, SortState)
where
    T: RecordSource + ?Sized,
    C: LabelCatalog + ?Sized,
{
    let effective = state.effective();
    let sorted = algo::sort(records, &effective);
    (build_rows(sorted, catalog), effective)
}
