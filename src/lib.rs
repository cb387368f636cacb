//! # region-table
//!
//! `region-table` turns raw per-region case records into the ordered, formatted
//! rows of a ranked statistics table. It owns the parts of such a table that
//! carry decisions: which values a column derives, how header clicks change the
//! ordering, how ties are broken, and how cells are formatted. Drawing the table,
//! translating labels and picking arrow glyphs are left to the caller.
//!
//! ## Columns
//!
//! | id           | value                       | sortable |
//! |--------------|-----------------------------|----------|
//! | `name`       | region label                | no       |
//! | `actual`     | current count               | yes      |
//! | `difference` | `max(actual - old, 0)`      | yes      |
//! | `percentage` | reported change, `+5%` form | yes      |
//!
//! ## Ordering
//!
//! With no explicit sort the table is ordered by `difference` descending, then
//! `actual` descending, then input order. Activating a sortable header cycles it
//! through descending, ascending and back to the default; activating another
//! header starts that one at descending.
//!
//! ## Usage
//!
//! ```rust
//! use region_table::prelude::*;
//!
//! let regions = vec![
//!     Region::new("North", 100, 80),
//!     Region::new("South", 50, 60),
//!     Region::new("East", 100, 50),
//! ];
//! let labels: StaticLabels = [
//!     ("REGIONS_North", "regions.north"),
//!     ("REGIONS_South", "regions.south"),
//!     ("REGIONS_East", "regions.east"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut table = RegionTable::new();
//! let view = table.view(&regions, &labels);
//! let names: Vec<_> = view.rows.iter().map(|row| row.text(ColumnId::Name).unwrap()).collect();
//! assert_eq!(names, vec!["regions.east", "regions.north", "regions.south"]);
//!
//! // Click "actual" twice: descending, then ascending.
//! table.activate_header("actual").unwrap();
//! table.activate_header("actual").unwrap();
//! assert_eq!(table.sort_state().descriptors(), &[SortDescriptor::asc(ColumnId::Actual)]);
//! ```
//!
//! ## Custom record containers
//!
//! The engine reads records through the [`RecordSource`] trait, so any
//! random-access container can be sorted by index without copying.

pub mod algo;
pub mod columns;
pub mod core;
pub mod error;
pub mod labels;
pub mod state;
pub mod table;
pub mod view;

pub use algo::{sort, sort_in_place, sort_indices};
pub use core::{RecordSource, Region, Value};
pub use error::{CatalogError, ConfigurationError, LabelLookupError};
pub use state::{activate_column_header, SortState};
pub use view::compute_view_model;

pub mod prelude {
    pub use crate::algo::{sort, sort_in_place, sort_indices};
    pub use crate::columns::ColumnId;
    pub use crate::core::{RecordSource, Region, Value};
    pub use crate::error::{ConfigurationError, LabelLookupError};
    pub use crate::labels::{LabelCatalog, StaticLabels};
    pub use crate::state::{activate_column_header, Direction, SortDescriptor, SortState};
    pub use crate::table::{RegionTable, TableView};
    pub use crate::view::{compute_view_model, HeaderViewModel, RowViewModel, SortIndicator};
}
