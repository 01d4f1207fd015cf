//! Encounter documents read from a data directory.
//!
//! ```text
//! journals/<folder>/<entry>.md     one journal entry per file
//! journals/<folder>/folder.json    optional: {"kind": "Actor"}
//! packs/<key>.json                 {"kind": "JournalEntry", "documents": [...]}
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ae_core::{DocumentKind, EncounterDocument, Folder, PackIndex};
use ae_engine::DocumentStore;

/// Name of the optional folder metadata file.
pub const FOLDER_META: &str = "folder.json";

/// The on-disk shape of a compendium pack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackFile {
    /// What the pack holds.
    #[serde(default)]
    pub kind: DocumentKind,
    /// Full documents.
    #[serde(default)]
    pub documents: Vec<EncounterDocument>,
}

#[derive(Debug, Default, Deserialize)]
struct FolderMeta {
    #[serde(default)]
    kind: DocumentKind,
}

/// A [`DocumentStore`] over `journals/` and `packs/` directories.
///
/// Each pack file is parsed once; later index and document requests are
/// served from the parsed copy.
pub struct DirectoryDocuments {
    journals: PathBuf,
    packs: PathBuf,
    parsed: RefCell<HashMap<String, PackFile>>,
}

impl DirectoryDocuments {
    /// Documents under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            journals: data_dir.join("journals"),
            packs: data_dir.join("packs"),
            parsed: RefCell::new(HashMap::new()),
        }
    }

    /// Path of the pack file for `key`.
    pub fn pack_path(&self, key: &str) -> PathBuf {
        self.packs.join(format!("{key}.json"))
    }

    fn read_pack(&self, key: &str) -> Option<PackFile> {
        let path = self.pack_path(key);
        let text = std::fs::read_to_string(&path).ok()?;
        serde_json::from_str(&text)
            .inspect_err(|e| log::warn!("cannot parse {}: {e}", path.display()))
            .ok()
    }

    /// Run `f` on the parsed pack for `key`, reading the file on first use.
    fn with_pack<T>(&self, key: &str, f: impl FnOnce(&PackFile) -> T) -> Option<T> {
        let mut parsed = self.parsed.borrow_mut();
        if !parsed.contains_key(key) {
            let pack = self.read_pack(key)?;
            parsed.insert(key.to_string(), pack);
        }
        parsed.get(key).map(f)
    }
}

impl DocumentStore for DirectoryDocuments {
    fn folder(&self, name: &str) -> Option<Folder> {
        let dir = self.journals.join(name);
        if !dir.is_dir() {
            return None;
        }

        let kind = std::fs::read_to_string(dir.join(FOLDER_META))
            .ok()
            .and_then(|text| serde_json::from_str::<FolderMeta>(&text).ok())
            .unwrap_or_default()
            .kind;

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
            .ok()?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
            .collect();
        paths.sort();

        let documents = paths
            .iter()
            .filter_map(|path| {
                let stem = path.file_stem()?.to_string_lossy().into_owned();
                let content = std::fs::read_to_string(path)
                    .inspect_err(|e| log::warn!("cannot read {}: {e}", path.display()))
                    .ok()?;
                Some(EncounterDocument::new(
                    format!("{name}/{stem}"),
                    stem,
                    content,
                ))
            })
            .collect();

        Some(Folder {
            name: name.to_string(),
            kind,
            documents,
        })
    }

    fn pack_index(&self, key: &str) -> Option<PackIndex> {
        self.with_pack(key, |pack| PackIndex {
            key: key.to_string(),
            kind: pack.kind.clone(),
            entries: pack.documents.iter().map(EncounterDocument::summary).collect(),
        })
    }

    fn pack_document(&self, key: &str, id: &str) -> Option<EncounterDocument> {
        self.with_pack(key, |pack| {
            pack.documents.iter().find(|doc| doc.id == id).cloned()
        })
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_journal_folder() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("journals/Encounters");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("Wolves.md"), "**Type:** Beasts").unwrap();
        fs::write(folder.join("notes.txt"), "ignored").unwrap();

        let docs = DirectoryDocuments::new(dir.path());
        let found = docs.folder("Encounters").unwrap();
        assert_eq!(found.kind, DocumentKind::JournalEntry);
        assert_eq!(found.documents.len(), 1);
        assert_eq!(found.documents[0].name, "Wolves");
        assert_eq!(found.documents[0].id, "Encounters/Wolves");
        assert!(docs.folder("Missing").is_none());
    }

    #[test]
    fn folder_kind_from_metadata() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("journals/Monsters");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(FOLDER_META), r#"{"kind": "Actor"}"#).unwrap();

        let found = DirectoryDocuments::new(dir.path()).folder("Monsters").unwrap();
        assert_eq!(found.kind, DocumentKind::Actor);
    }

    #[test]
    fn reads_pack_index_and_documents() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("packs")).unwrap();
        let pack = PackFile {
            kind: DocumentKind::JournalEntry,
            documents: vec![EncounterDocument::new("a1", "Ambush", "**Type:** Ambush")],
        };
        fs::write(
            dir.path().join("packs/encounters.menador.json"),
            serde_json::to_string(&pack).unwrap(),
        )
        .unwrap();

        let docs = DirectoryDocuments::new(dir.path());
        let index = docs.pack_index("encounters.menador").unwrap();
        assert_eq!(index.entries.len(), 1);
        assert_eq!(index.entries[0].name, "Ambush");
        let doc = docs.pack_document("encounters.menador", "a1").unwrap();
        assert_eq!(doc.content, "**Type:** Ambush");
        assert!(docs.pack_document("encounters.menador", "zz").is_none());
        assert!(docs.pack_index("other").is_none());
    }

    #[test]
    fn pack_file_is_parsed_once() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("packs")).unwrap();
        let pack = PackFile {
            kind: DocumentKind::JournalEntry,
            documents: vec![
                EncounterDocument::new("a1", "Ambush", "**Type:** Ambush"),
                EncounterDocument::new("p1", "Patrol", "**Type:** Patrol"),
            ],
        };
        let path = dir.path().join("packs/encounters.menador.json");
        fs::write(&path, serde_json::to_string(&pack).unwrap()).unwrap();

        let docs = DirectoryDocuments::new(dir.path());
        assert_eq!(docs.pack_index("encounters.menador").unwrap().entries.len(), 2);

        // Later fetches must not go back to disk.
        fs::write(&path, "{ corrupted").unwrap();
        assert_eq!(
            docs.pack_document("encounters.menador", "a1").unwrap().name,
            "Ambush"
        );
        assert_eq!(
            docs.pack_document("encounters.menador", "p1").unwrap().name,
            "Patrol"
        );
    }
}
