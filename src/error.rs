//! Error types.
//!
//! - [`ConfigurationError`]: a column id or sort state that does not fit the registry.
//!   These are programming errors and are returned, never panicked on.
//! - [`LabelLookupError`]: a region name with no label entry. Carried per cell so
//!   one bad row never spoils the rest of the table.
//! - [`CatalogError`]: a label table that failed to decode.

use crate::columns::ColumnId;

/// A column id or sort state that does not match the column registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No column is registered under this id.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// The column exists but cannot take part in a sort state.
    #[error("column '{0}' is not sortable")]
    NotSortable(ColumnId),

    /// The column already appears earlier in the sort state.
    #[error("column '{0}' appears more than once in the sort state")]
    DuplicateColumn(ColumnId),
}

impl ConfigurationError {
    /// Creates an unknown column error.
    pub fn unknown_column(id: impl Into<String>) -> Self {
        Self::UnknownColumn(id.into())
    }
}

/// The label identifier derived from a region name has no entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no label registered for '{identifier}'")]
pub struct LabelLookupError {
    identifier: String,
}

impl LabelLookupError {
    /// Creates a lookup error for the given label identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// The identifier that failed to resolve.
    ///
    /// Renderers usually show this in place of the missing label.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// A label table could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid label table: {0}")]
    Json(#[from] serde_json::Error),
}
