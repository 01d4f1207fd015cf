//! The encounter-type catalog shipped as `encounter-type-table.json`.
//!
//! Loaded once at startup. Nothing in encounter resolution reads it; a
//! failed load is logged and an empty catalog is used instead.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AeResult;

/// File name of the catalog resource.
pub const CATALOG_FILE: &str = "encounter-type-table.json";

/// Encounter-type names mapped to free-form metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncounterTypeCatalog {
    entries: BTreeMap<String, Value>,
}

impl EncounterTypeCatalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> AeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> AeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load a catalog, logging and degrading to an empty one on failure.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => {
                log::info!("encounter type table loaded ({} types)", catalog.len());
                catalog
            }
            Err(e) => {
                log::warn!("could not load {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Metadata for a type name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Number of types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no types.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
