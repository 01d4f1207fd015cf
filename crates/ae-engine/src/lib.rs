//! Travel encounter engine for Alarm Encounter.
//!
//! Computes an alarm level from travel modifiers, rolls 3d4 against the
//! stored encounter table, looks up a matching encounter document from a
//! journal folder or compendium, and renders the result for the chat log.
//!
//! The host's settings store, document store, and chat log are reached only
//! through [`ae_core::KeyValueStore`], [`DocumentStore`], and [`ChatLog`].

pub mod chat;
pub mod config;
pub mod dice;
pub mod editor;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod modifiers;
pub mod resolver;

pub use chat::{ChatLog, ChatMessage, MemoryChatLog, Preview, render_message};
pub use config::EngineConfig;
pub use dice::{DiceInput, DiceResult, roll_dice};
pub use editor::{CellEdits, TableEditor, export_table, reset_to_default};
pub use error::{EngineError, EngineResult};
pub use extract::{ActorRef, EncounterFields, extract_fields};
pub use lookup::{DocumentSource, DocumentStore, MemoryDocuments};
pub use modifiers::{ModifierSet, SituationalFlag, compute_alarm_level};
pub use resolver::{ResolvedEncounter, Resolver, lookup_cell};
