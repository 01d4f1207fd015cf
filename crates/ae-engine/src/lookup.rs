//! Finding an encounter document for an encounter type.
//!
//! Two sources are supported. A journal folder is scanned directly. A
//! compendium is filtered through its index first, and only the documents
//! whose names match have their bodies fetched. When several documents
//! match, one is picked uniformly at random.

use std::collections::HashMap;

use rand::Rng;

use ae_core::{
    DocumentKind, EncounterDocument, Folder, PackIndex, SourceKind, SourceSettings,
};

use crate::extract::has_type_tag;

/// The host's document store, as far as encounter lookup needs it.
pub trait DocumentStore {
    /// The folder with this name, if one exists.
    fn folder(&self, name: &str) -> Option<Folder>;

    /// The index of the compendium with this key, if one exists.
    fn pack_index(&self, key: &str) -> Option<PackIndex>;

    /// Fetch one full document from a compendium.
    fn pack_document(&self, key: &str, id: &str) -> Option<EncounterDocument>;
}

/// Where to look for encounter documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A journal folder, by name.
    Folder {
        /// Folder name.
        name: String,
    },
    /// A compendium pack, by key.
    Compendium {
        /// Pack key.
        key: String,
    },
}

impl From<&SourceSettings> for DocumentSource {
    fn from(settings: &SourceSettings) -> Self {
        match settings.kind {
            SourceKind::Journal => Self::Folder {
                name: settings.key.clone(),
            },
            SourceKind::Compendium => Self::Compendium {
                key: settings.key.clone(),
            },
        }
    }
}

impl DocumentSource {
    /// Find a document for `encounter_type`.
    ///
    /// Returns `None` both when nothing matches and when the source does
    /// not exist or holds something other than journal entries. The two
    /// cases are told apart in the log only.
    pub fn find_by_type<D, R>(
        &self,
        encounter_type: &str,
        store: &D,
        rng: &mut R,
    ) -> Option<EncounterDocument>
    where
        D: DocumentStore + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = match self {
            Self::Folder { name } => folder_candidates(encounter_type, name, store)?,
            Self::Compendium { key } => compendium_candidates(encounter_type, key, store)?,
        };

        if candidates.is_empty() {
            log::warn!("no journal entries found for type: {encounter_type}");
            return None;
        }

        log::debug!(
            "{} candidate(s) for type {encounter_type}",
            candidates.len()
        );
        pick_uniform(candidates, rng)
    }
}

fn name_matches(name: &str, encounter_type: &str) -> bool {
    name.to_lowercase().contains(&encounter_type.to_lowercase())
}

fn folder_candidates<D: DocumentStore + ?Sized>(
    encounter_type: &str,
    name: &str,
    store: &D,
) -> Option<Vec<EncounterDocument>> {
    let Some(folder) = store.folder(name) else {
        log::warn!("journal folder \"{name}\" not found");
        return None;
    };
    if folder.kind != DocumentKind::JournalEntry {
        log::warn!("folder \"{name}\" holds {}, not journal entries", folder.kind);
        return None;
    }

    Some(
        folder
            .documents
            .into_iter()
            .filter(|doc| {
                name_matches(&doc.name, encounter_type)
                    || has_type_tag(&doc.content, encounter_type)
            })
            .collect(),
    )
}

fn compendium_candidates<D: DocumentStore + ?Sized>(
    encounter_type: &str,
    key: &str,
    store: &D,
) -> Option<Vec<EncounterDocument>> {
    let Some(index) = store.pack_index(key) else {
        log::warn!("compendium \"{key}\" not found");
        return None;
    };
    if index.kind != DocumentKind::JournalEntry {
        log::warn!("compendium \"{key}\" holds {}, not journal entries", index.kind);
        return None;
    }

    Some(
        index
            .entries
            .iter()
            .filter(|entry| name_matches(&entry.name, encounter_type))
            .filter_map(|entry| store.pack_document(key, &entry.id))
            .filter(|doc| has_type_tag(&doc.content, encounter_type))
            .collect(),
    )
}

fn pick_uniform<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..items.len());
    Some(items.swap_remove(idx))
}

/// A [`DocumentStore`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocuments {
    folders: HashMap<String, Folder>,
    packs: HashMap<String, (DocumentKind, Vec<EncounterDocument>)>,
}

impl MemoryDocuments {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a journal folder.
    pub fn with_folder(mut self, name: &str, documents: Vec<EncounterDocument>) -> Self {
        self.folders.insert(
            name.to_string(),
            Folder {
                name: name.to_string(),
                kind: DocumentKind::JournalEntry,
                documents,
            },
        );
        self
    }

    /// Add a folder of some other kind.
    pub fn with_folder_of(mut self, folder: Folder) -> Self {
        self.folders.insert(folder.name.clone(), folder);
        self
    }

    /// Add a compendium pack.
    pub fn with_pack(
        mut self,
        key: &str,
        kind: DocumentKind,
        documents: Vec<EncounterDocument>,
    ) -> Self {
        self.packs.insert(key.to_string(), (kind, documents));
        self
    }
}

impl DocumentStore for MemoryDocuments {
    fn folder(&self, name: &str) -> Option<Folder> {
        self.folders.get(name).cloned()
    }

    fn pack_index(&self, key: &str) -> Option<PackIndex> {
        self.packs.get(key).map(|(kind, docs)| PackIndex {
            key: key.to_string(),
            kind: kind.clone(),
            entries: docs.iter().map(EncounterDocument::summary).collect(),
        })
    }

    fn pack_document(&self, key: &str, id: &str) -> Option<EncounterDocument> {
        self.packs
            .get(key)
            .and_then(|(_, docs)| docs.iter().find(|d| d.id == id).cloned())
    }
}
