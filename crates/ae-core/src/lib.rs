//! Core types for Alarm Encounter: the encounter table, settings, and documents.
//!
//! This crate holds the data model the resolver works on and the
//! [`KeyValueStore`] capability through which the host persists it. It knows
//! nothing about dice or document lookup.

/// The encounter-type catalog resource.
pub mod catalog;
/// Encounter documents, folders, and compendium indexes.
pub mod document;
/// Error types used throughout the crate.
pub mod error;
/// Persisted settings and the key-value store capability.
pub mod settings;
/// The 3d4 encounter table.
pub mod table;

/// Re-export the catalog.
pub use catalog::EncounterTypeCatalog;
/// Re-export document types.
pub use document::{DocumentKind, DocumentSummary, EncounterDocument, Folder, PackIndex};
/// Re-export error types.
pub use error::{AeError, AeResult};
/// Re-export settings types.
pub use settings::{KeyValueStore, MemoryStore, Settings, SourceKind, SourceSettings};
/// Re-export table types.
pub use table::{CellRef, EncounterTable, UNEVENTFUL};
