//! The sort engine.
//!
//! Records are ordered by cascading through the descriptors of a [`SortState`]:
//! - the first descriptor that tells two records apart decides their order,
//! - `Descending` reverses the natural ascending comparison of that column,
//! - records equal under every descriptor keep their input order.
//!
//! The last rule comes from using a stable sort over the index permutation, not
//! from an extra fallback key. The main entry points are [`sort_indices`],
//! [`sort`] and [`sort_in_place`].

use crate::columns::ColumnDef;
use crate::core::{RecordSource, Region};
use crate::state::{Direction, SortState};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Computes the order of `source` under `state` without touching it.
///
/// Returns a `Vec<usize>` where position `i` holds the index of the record that
/// belongs at row `i`. An empty state yields the identity permutation.
///
/// # Examples
///
/// ```
/// use region_table::algo::sort_indices;
/// use region_table::core::Region;
/// use region_table::state::SortState;
///
/// let regions = vec![
///     Region::new("North", 100, 80),
///     Region::new("South", 50, 60),
///     Region::new("East", 100, 50),
/// ];
///
/// assert_eq!(sort_indices(&regions, &SortState::default()), vec![2, 0, 1]);
/// ```
pub fn sort_indices<T: RecordSource + ?Sized>(source: &T, state: &SortState) -> Vec<usize> {
    let len = source.len();
    let mut indices: Vec<usize> = (0..len).collect();
    if len < 2 || state.is_empty() {
        return indices;
    }

    let keys: Vec<(&'static ColumnDef, Direction)> = state
        .descriptors()
        .iter()
        .map(|d| (d.column.definition(), d.direction))
        .collect();

    log::trace!("sorting {} records by {:?}", len, state.descriptors());

    // Stable: ties keep ascending index order.
    indices.sort_by(|&a, &b| compare_records(source.record(a), source.record(b), &keys));
    indices
}

/// Returns references to the records of `source` in sorted order.
pub fn sort<'a, T: RecordSource + ?Sized>(source: &'a T, state: &SortState) -> Vec<&'a Region> {
    sort_indices(source, state)
        .into_iter()
        .map(|index| source.record(index))
        .collect()
}

/// Sorts a mutable slice of records in place.
///
/// This is a convenience wrapper for [`sort_indices`] which computes the order
/// and then applies the permutation to the slice.
///
/// # Examples
///
/// ```
/// use region_table::algo::sort_in_place;
/// use region_table::core::Region;
/// use region_table::state::SortState;
///
/// let mut regions = vec![Region::new("North", 100, 80), Region::new("East", 100, 50)];
/// sort_in_place(&mut regions, &SortState::default());
///
/// assert_eq!(regions[0].name, "East");
/// ```
pub fn sort_in_place<T: Borrow<Region>>(data: &mut [T], state: &SortState) {
    let indices = sort_indices(&*data, state);
    apply_permutation(data, indices);
}

fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // placed
            current = next;
        }
        indices[current] = current;
    }
}

/// Compares two records under the resolved sort keys.
#[inline]
fn compare_records(
    a: &Region,
    b: &Region,
    keys: &[(&'static ColumnDef, Direction)],
) -> Ordering {
    for (column, direction) in keys {
        let ordering = column.value(a).compare(&column.value(b));
        if ordering != Ordering::Equal {
            return match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            };
        }
    }
    Ordering::Equal
}
