//! The column registry.
//!
//! Every column the table can show is declared once in [`COLUMNS`], in display
//! order. A column pairs a [`ColumnId`] with a pure accessor that projects a
//! [`Value`] out of a [`Region`], a `sortable` flag and the label key of its header.

use crate::core::{Region, Value};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a registered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    /// Region name, shown through its label.
    Name,
    /// Current cumulative count.
    Actual,
    /// Daily change, floored at zero.
    Difference,
    /// Reported percentage change.
    Percentage,
}

impl ColumnId {
    /// The string id used by the rendering layer.
    pub const fn as_str(self) -> &'static str {
        match self {
            ColumnId::Name => "name",
            ColumnId::Actual => "actual",
            ColumnId::Difference => "difference",
            ColumnId::Percentage => "percentage",
        }
    }

    /// The registry entry for this column.
    pub fn definition(self) -> &'static ColumnDef {
        // COLUMNS is declared in the same order as the enum.
        &COLUMNS[self as usize]
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COLUMNS
            .iter()
            .map(|column| column.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ConfigurationError::unknown_column(s))
    }
}

/// Projects a column value out of a record.
pub type Accessor = fn(&Region) -> Value;

/// A registered column.
pub struct ColumnDef {
    pub id: ColumnId,
    pub accessor: Accessor,
    pub sortable: bool,
    /// Opaque key of the header label, resolved by the rendering layer.
    pub label_key: &'static str,
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("sortable", &self.sortable)
            .field("label_key", &self.label_key)
            .finish_non_exhaustive()
    }
}

impl ColumnDef {
    /// Applies the accessor to a record.
    #[inline]
    pub fn value(&self, region: &Region) -> Value {
        (self.accessor)(region)
    }
}

fn name(region: &Region) -> Value {
    Value::Text(region.name.clone())
}

fn actual(region: &Region) -> Value {
    Value::Integer(region.actual)
}

fn difference(region: &Region) -> Value {
    Value::Integer(region.difference())
}

fn percentage(region: &Region) -> Value {
    Value::Number(region.percentage)
}

/// All columns, in display order.
pub static COLUMNS: [ColumnDef; 4] = [
    ColumnDef {
        id: ColumnId::Name,
        accessor: name,
        sortable: false,
        label_key: "REGIONS_NAME",
    },
    ColumnDef {
        id: ColumnId::Actual,
        accessor: actual,
        sortable: true,
        label_key: "REGIONS_CASES",
    },
    ColumnDef {
        id: ColumnId::Difference,
        accessor: difference,
        sortable: true,
        label_key: "REGIONS_DAILY_CASES",
    },
    ColumnDef {
        id: ColumnId::Percentage,
        accessor: percentage,
        sortable: true,
        label_key: "REGIONS_PERCENTAGE_CASES",
    },
];

/// Looks up a column by its string id.
///
/// # Examples
///
/// ```
/// use region_table::columns::{self, ColumnId};
///
/// assert_eq!(columns::lookup("difference").unwrap().id, ColumnId::Difference);
/// assert!(columns::lookup("nonexistent").is_err());
/// ```
pub fn lookup(id: &str) -> Result<&'static ColumnDef, ConfigurationError> {
    id.parse::<ColumnId>().map(ColumnId::definition)
}

/// Iterates over the registered columns in display order.
pub fn iter() -> impl Iterator<Item = &'static ColumnDef> {
    COLUMNS.iter()
}
