//! Label identifiers and the catalog they resolve through.
//!
//! Region names are turned into label identifiers with [`region_identifier`]:
//! `REGIONS_` followed by the [`normalize`]d name. The catalog maps identifiers
//! to opaque message ids; translating those is up to the rendering layer.

use crate::error::{CatalogError, LabelLookupError};
use std::collections::HashMap;

/// Prefix shared by every region label identifier.
pub const REGION_PREFIX: &str = "REGIONS_";

/// Strips all whitespace, then all hyphens, from a region name.
///
/// ```
/// use region_table::labels::normalize;
///
/// assert_eq!(normalize("Hradec Králové"), "HradecKrálové");
/// assert_eq!(normalize("Moravian-Silesian Region"), "MoravianSilesianRegion");
/// ```
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .filter(|&c| c != '-')
        .collect()
}

/// Label identifier for a region name.
pub fn region_identifier(name: &str) -> String {
    format!("{REGION_PREFIX}{}", normalize(name))
}

/// Resolves label identifiers to message ids.
pub trait LabelCatalog {
    fn resolve(&self, identifier: &str) -> Option<&str>;

    /// Resolves an identifier, failing if it has no entry.
    fn lookup(&self, identifier: &str) -> Result<&str, LabelLookupError> {
        self.resolve(identifier).ok_or_else(|| LabelLookupError::new(identifier))
    }
}

impl<C: LabelCatalog + ?Sized> LabelCatalog for &C {
    fn resolve(&self, identifier: &str) -> Option<&str> {
        (**self).resolve(identifier)
    }
}

impl<S: std::hash::BuildHasher> LabelCatalog for HashMap<String, String, S> {
    fn resolve(&self, identifier: &str) -> Option<&str> {
        self.get(identifier).map(String::as_str)
    }
}

/// A fixed identifier → message id table.
///
/// # Examples
///
/// ```
/// use region_table::labels::{LabelCatalog, StaticLabels};
///
/// let labels = StaticLabels::from_json(r#"{ "REGIONS_Praha": "regions.praha" }"#).unwrap();
/// assert_eq!(labels.resolve("REGIONS_Praha"), Some("regions.praha"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct StaticLabels {
    entries: HashMap<String, String>,
}

impl StaticLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a JSON object of identifier → message id pairs.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let labels: StaticLabels = serde_json::from_str(json)?;
        log::debug!("loaded {} label entries", labels.len());
        Ok(labels)
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, identifier: impl Into<String>, message_id: impl Into<String>) {
        self.entries.insert(identifier.into(), message_id.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticLabels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl LabelCatalog for StaticLabels {
    fn resolve(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }
}
