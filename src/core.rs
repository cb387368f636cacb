//! Core types for region tables.
//!
//! This module defines:
//! - [`Region`]: The raw per-region record the table is built from.
//! - [`Value`]: The primitive a column accessor projects out of a record.
//! - [`RecordSource`]: The trait the sort engine reads records through.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

/// Case statistics for a single region.
///
/// `actual` and `old` are the current and previous cumulative counts. They are
/// expected to be non-negative but are accepted as-is. `percentage` is the
/// signed change reported by the data source and is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub actual: i64,
    pub old: i64,
    #[serde(default)]
    pub percentage: f64,
}

impl Region {
    /// Creates a record with a zero percentage change.
    pub fn new(name: impl Into<String>, actual: i64, old: i64) -> Self {
        Self {
            name: name.into(),
            actual,
            old,
            percentage: 0.0,
        }
    }

    /// Sets the reported percentage change.
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Daily change, floored at zero.
    ///
    /// Equals `actual - old` whenever that is non-negative.
    #[inline]
    pub fn difference(&self) -> i64 {
        self.actual.saturating_sub(self.old).max(0)
    }
}

/// A primitive projected from a [`Region`] by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Number(f64),
    Text(String),
    /// The column does not apply to this record.
    ///
    /// None of the built-in accessors yield this; it is there for custom or
    /// future accessors on optional fields.
    Missing,
}

impl Value {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Missing => 0,
            Value::Integer(_) | Value::Number(_) => 1,
            Value::Text(_) => 2,
        }
    }

    /// Natural ascending order.
    ///
    /// Ordering rules:
    /// 1. `Missing` < numbers < text.
    /// 2. Integers compare exactly; integers and floats compare numerically.
    /// 3. NaN sorts after every other number.
    /// 4. Text compares lexicographically.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Missing, Value::Missing) => Ordering::Equal,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => compare_f64(a, b),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

#[inline]
fn compare_f64(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{v}"),
            // -0.0 would otherwise print with a sign
            Value::Number(v) if *v == 0.0 => f.write_str("0"),
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Missing => Ok(()),
        }
    }
}

/// A trait for reading region records out of a collection by index.
///
/// The sort engine only ever addresses records by position, so any random-access
/// container of records (or of references to records) can be sorted without
/// copying.
///
/// # Examples
///
/// ```
/// use region_table::core::{RecordSource, Region};
///
/// struct Feed {
///     regions: Vec<Region>,
/// }
///
/// impl RecordSource for Feed {
///     fn record(&self, index: usize) -> &Region {
///         &self.regions[index]
///     }
///
///     fn len(&self) -> usize {
///         self.regions.len()
///     }
/// }
/// ```
pub trait RecordSource {
    /// Returns the record at the given index.
    fn record(&self, index: usize) -> &Region;

    /// Returns the number of records in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Borrow<Region>> RecordSource for [T] {
    fn record(&self, index: usize) -> &Region {
        self[index].borrow()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: Borrow<Region>> RecordSource for Vec<T> {
    fn record(&self, index: usize) -> &Region {
        self[index].borrow()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// O(1) random access, so a deque works as well as a slice.
impl<T: Borrow<Region>> RecordSource for VecDeque<T> {
    fn record(&self, index: usize) -> &Region {
        self[index].borrow()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
