//! The encounter table editor.
//!
//! Loads, saves, imports, and exports the table kept in the host's settings
//! store. Writes are all-or-nothing: a rejected edit or import leaves the
//! stored table as it was.

use std::collections::BTreeMap;

use ae_core::{CellRef, EncounterTable, KeyValueStore, Settings};

use crate::error::EngineResult;

/// Edits submitted from the table form, keyed by cell.
pub type CellEdits = BTreeMap<CellRef, String>;

/// Reads and writes the stored encounter table.
pub struct TableEditor<'s, S: KeyValueStore + ?Sized> {
    settings: Settings<'s, S>,
}

impl<'s, S: KeyValueStore + ?Sized> TableEditor<'s, S> {
    /// Create an editor over a settings store.
    pub fn new(store: &'s mut S) -> Self {
        Self {
            settings: Settings::new(store),
        }
    }

    /// The stored table, or the default table when nothing valid is stored.
    ///
    /// The default is not written back.
    pub fn load(&self) -> EngineResult<EncounterTable> {
        let raw = self.settings.raw_table()?;
        if raw.as_object().is_some_and(|obj| obj.is_empty()) {
            return Ok(reset_to_default());
        }
        match EncounterTable::from_value(&raw) {
            Ok(table) => Ok(table),
            Err(e) => {
                log::warn!("stored encounter table is invalid ({e}), using default");
                Ok(reset_to_default())
            }
        }
    }

    /// Apply cell edits on top of the current table and persist the result.
    ///
    /// Every label is trimmed. If any cell is blank or outside the table the
    /// whole submission is rejected and nothing is written.
    pub fn save(&mut self, edits: &CellEdits) -> EngineResult<EncounterTable> {
        let mut table = self.load()?;
        for (cell, label) in edits {
            table.set(*cell, label)?;
        }
        self.settings.set_table(&table)?;
        log::info!("encounter table updated ({} cell(s))", edits.len());
        Ok(table)
    }

    /// Parse edits keyed by `<row>-<col>` form names and save them.
    pub fn save_form(&mut self, form: &BTreeMap<String, String>) -> EngineResult<EncounterTable> {
        let mut edits = CellEdits::new();
        for (key, value) in form {
            edits.insert(key.parse()?, value.clone());
        }
        self.save(&edits)
    }

    /// Validate a JSON table and replace the stored table with it.
    pub fn import_table(&mut self, raw_json: &str) -> EngineResult<EncounterTable> {
        let value: serde_json::Value = serde_json::from_str(raw_json.trim())
            .map_err(ae_core::AeError::from)?;
        let table = EncounterTable::from_value(&value)?;
        self.settings.set_table(&table)?;
        log::info!("encounter table imported");
        Ok(table)
    }

    /// Persist a table as-is, e.g. after [`reset_to_default`].
    pub fn store(&mut self, table: &EncounterTable) -> EngineResult<()> {
        self.settings.set_table(table)?;
        Ok(())
    }
}

/// Pretty-printed JSON for the clipboard.
pub fn export_table(table: &EncounterTable) -> EngineResult<String> {
    Ok(table.to_json_pretty()?)
}

/// The canonical all-"Uneventful" table. Not persisted.
pub fn reset_to_default() -> EncounterTable {
    EncounterTable::default()
}
