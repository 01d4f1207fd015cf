//! Persisted settings and the key-value capability that stores them.
//!
//! The host owns persistence. Everything here talks to it through
//! [`KeyValueStore`], so the engine can run against an in-memory store in
//! tests and a file on disk in the CLI.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AeError, AeResult};
use crate::table::EncounterTable;

/// Key of the document source kind setting.
pub const TABLE_SOURCE_TYPE: &str = "tableSourceType";
/// Key of the compendium key / folder name setting.
pub const TABLE_SOURCE_KEY: &str = "tableSourceKey";
/// Key of the stored encounter table.
pub const CUSTOM_ENCOUNTER_TABLE: &str = "customEncounterTable";

/// Default compendium key.
pub const DEFAULT_SOURCE_KEY: &str = "encounters.menador";

/// A host-owned key-value store holding JSON values.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> AeResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value) -> AeResult<()>;
}

/// A [`KeyValueStore`] that lives only in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `set` has been called.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AeResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> AeResult<()> {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}

/// Where encounter documents are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// An indexed compendium pack, addressed by key.
    #[default]
    Compendium,
    /// A folder of journal entries, addressed by name.
    Journal,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compendium => write!(f, "compendium"),
            Self::Journal => write!(f, "journal"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = AeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compendium" => Ok(Self::Compendium),
            "journal" => Ok(Self::Journal),
            _ => Err(AeError::InvalidSetting {
                key: TABLE_SOURCE_TYPE.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// The document source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Compendium or journal folder.
    pub kind: SourceKind,
    /// Compendium key or folder name.
    pub key: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::Compendium,
            key: DEFAULT_SOURCE_KEY.to_string(),
        }
    }
}

/// Typed access to the module's settings in a [`KeyValueStore`].
pub struct Settings<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
}

impl<'s, S: KeyValueStore + ?Sized> Settings<'s, S> {
    /// Wrap a store.
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// The configured document source, falling back to defaults for
    /// missing or unrecognised values.
    pub fn source(&self) -> AeResult<SourceSettings> {
        let defaults = SourceSettings::default();

        let kind = match self.store.get(TABLE_SOURCE_TYPE)? {
            Some(Value::String(s)) => s.parse::<SourceKind>().unwrap_or_else(|e| {
                log::warn!("{e}, using {}", defaults.kind);
                defaults.kind
            }),
            _ => defaults.kind,
        };
        let key = match self.store.get(TABLE_SOURCE_KEY)? {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            _ => defaults.key,
        };

        Ok(SourceSettings { kind, key })
    }

    /// Persist the document source.
    pub fn set_source(&mut self, source: &SourceSettings) -> AeResult<()> {
        let key = source.key.trim();
        if key.is_empty() {
            return Err(AeError::InvalidSetting {
                key: TABLE_SOURCE_KEY.to_string(),
                value: source.key.clone(),
            });
        }
        self.store
            .set(TABLE_SOURCE_TYPE, Value::String(source.kind.to_string()))?;
        self.store
            .set(TABLE_SOURCE_KEY, Value::String(key.to_string()))
    }

    /// The raw stored table value. An unset table reads as `{}`.
    pub fn raw_table(&self) -> AeResult<Value> {
        Ok(self
            .store
            .get(CUSTOM_ENCOUNTER_TABLE)?
            .unwrap_or_else(|| Value::Object(Default::default())))
    }

    /// Persist a complete encounter table.
    pub fn set_table(&mut self, table: &EncounterTable) -> AeResult<()> {
        let value = serde_json::to_value(table)?;
        self.store.set(CUSTOM_ENCOUNTER_TABLE, value)
    }
}
