//! Sort state and header toggling.
//!
//! A [`SortState`] is an ordered list of [`SortDescriptor`]s: the first is the
//! primary key, the rest break ties in order. Header activation cycles a single
//! column through descending, ascending and back to no explicit sort, at which
//! point the engine falls back to [`SortState::default`].

use crate::columns::{self, ColumnId};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Sort direction of a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

/// A single (column, direction) sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub column: ColumnId,
    pub direction: Direction,
}

impl SortDescriptor {
    /// Ascending key on a column.
    pub const fn asc(column: ColumnId) -> Self {
        Self {
            column,
            direction: Direction::Ascending,
        }
    }

    /// Descending key on a column.
    pub const fn desc(column: ColumnId) -> Self {
        Self {
            column,
            direction: Direction::Descending,
        }
    }
}

/// Ordering used whenever no column has been picked explicitly.
pub const DEFAULT_SORT: [SortDescriptor; 2] = [
    SortDescriptor::desc(ColumnId::Difference),
    SortDescriptor::desc(ColumnId::Actual),
];

/// Ordered sort keys for one table.
///
/// Every column appears at most once and only sortable columns appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortState {
    descriptors: Vec<SortDescriptor>,
}

impl SortState {
    /// Builds a state from descriptors, primary first.
    pub fn new(
        descriptors: impl IntoIterator<Item = SortDescriptor>,
    ) -> Result<Self, ConfigurationError> {
        let mut checked: Vec<SortDescriptor> = Vec::new();
        for descriptor in descriptors {
            if !descriptor.column.definition().sortable {
                return Err(ConfigurationError::NotSortable(descriptor.column));
            }
            if checked.iter().any(|d| d.column == descriptor.column) {
                return Err(ConfigurationError::DuplicateColumn(descriptor.column));
            }
            checked.push(descriptor);
        }
        Ok(Self {
            descriptors: checked,
        })
    }

    /// No explicit sort.
    pub const fn empty() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    fn single(descriptor: SortDescriptor) -> Self {
        Self {
            descriptors: vec![descriptor],
        }
    }

    pub fn descriptors(&self) -> &[SortDescriptor] {
        &self.descriptors
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The highest-priority key, if any.
    pub fn primary(&self) -> Option<&SortDescriptor> {
        self.descriptors.first()
    }

    /// Direction this state sorts `column` in, if it takes part at all.
    pub fn direction_of(&self, column: ColumnId) -> Option<Direction> {
        self.descriptors
            .iter()
            .find(|d| d.column == column)
            .map(|d| d.direction)
    }

    /// The state the engine actually sorts by: this one, or the default when empty.
    pub fn effective(&self) -> SortState {
        if self.is_empty() {
            log::debug!("no explicit sort, using default ordering");
            SortState::default()
        } else {
            self.clone()
        }
    }

    /// Applies a header activation for `column`.
    ///
    /// - non-sortable column: unchanged
    /// - not the primary: `[column desc]`
    /// - primary descending: `[column asc]`
    /// - primary ascending: `[]`
    pub fn toggle(&self, column: ColumnId) -> SortState {
        if !column.definition().sortable {
            return self.clone();
        }

        let next = match self.primary() {
            Some(primary) if primary.column == column => match primary.direction {
                Direction::Descending => SortState::single(SortDescriptor::asc(column)),
                Direction::Ascending => SortState::empty(),
            },
            _ => SortState::single(SortDescriptor::desc(column)),
        };

        log::debug!(
            "header '{}' activated: {:?} -> {:?}",
            column,
            self.descriptors,
            next.descriptors
        );
        next
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            descriptors: DEFAULT_SORT.to_vec(),
        }
    }
}

impl<'de> Deserialize<'de> for SortState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let descriptors = Vec::<SortDescriptor>::deserialize(deserializer)?;
        SortState::new(descriptors).map_err(serde::de::Error::custom)
    }
}

/// Pure header-activation transition on a string column id.
///
/// Unknown ids fail; non-sortable columns leave the state unchanged.
///
/// # Examples
///
/// ```
/// use region_table::state::{activate_column_header, SortDescriptor, SortState};
/// use region_table::columns::ColumnId;
///
/// let state = activate_column_header(&SortState::empty(), "actual").unwrap();
/// assert_eq!(state.descriptors(), &[SortDescriptor::desc(ColumnId::Actual)]);
/// ```
pub fn activate_column_header(
    current: &SortState,
    column_id: &str,
) -> Result<SortState, ConfigurationError> {
    let column = columns::lookup(column_id)?;
    Ok(current.toggle(column.id))
}
