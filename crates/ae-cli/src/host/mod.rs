//! Host services for the CLI: settings, documents, and the chat log, all
//! rooted in one data directory.

pub mod chat_log;
pub mod documents;
pub mod settings_file;

use std::path::Path;

use ae_core::EncounterTypeCatalog;
use ae_core::catalog::CATALOG_FILE;

use chat_log::JsonlChatLog;
use documents::DirectoryDocuments;
use settings_file::FileStore;

/// Settings file name.
pub const SETTINGS_FILE: &str = "settings.json";
/// Chat log file name.
pub const CHAT_FILE: &str = "chat.jsonl";

/// Everything the engine needs from its host.
pub struct Host {
    /// Persisted settings.
    pub store: FileStore,
    /// Journal folders and compendium packs.
    pub documents: DirectoryDocuments,
    /// Posted chat messages.
    pub chat: JsonlChatLog,
    /// Encounter type catalog loaded at startup.
    pub catalog: EncounterTypeCatalog,
}

impl Host {
    /// Open the host services in `root`.
    pub fn open(root: &Path) -> Result<Self, String> {
        if !root.is_dir() {
            return Err(format!(
                "data directory {} does not exist (run `ae init` first)",
                root.display()
            ));
        }
        let store = FileStore::open(&root.join(SETTINGS_FILE))
            .map_err(|e| format!("cannot open settings: {e}"))?;
        Ok(Self {
            store,
            documents: DirectoryDocuments::new(root),
            chat: JsonlChatLog::new(&root.join(CHAT_FILE)),
            catalog: EncounterTypeCatalog::load_or_empty(&root.join(CATALOG_FILE)),
        })
    }
}
