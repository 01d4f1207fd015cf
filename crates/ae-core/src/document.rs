//! Encounter documents as the host's document store hands them out.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of document a folder or compendium holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Journal entries: the only kind encounters are read from.
    #[default]
    JournalEntry,
    /// Actor sheets.
    Actor,
    /// Items.
    Item,
    /// Anything else the host knows about.
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JournalEntry => write!(f, "JournalEntry"),
            Self::Actor => write!(f, "Actor"),
            Self::Item => write!(f, "Item"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// A prewritten encounter description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterDocument {
    /// Host identifier of the document.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Body text with `**Type:**`, `**Location:**` and `**Description:**` tags.
    #[serde(default)]
    pub content: String,
}

impl EncounterDocument {
    /// Create a document.
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// The index entry for this document.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// A compendium index entry: enough to filter by name without loading the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Host identifier of the document.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A named folder of documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    /// Folder name.
    pub name: String,
    /// What the folder holds.
    pub kind: DocumentKind,
    /// The folder's documents.
    pub documents: Vec<EncounterDocument>,
}

/// The index of a compendium pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackIndex {
    /// Pack key, e.g. `encounters.menador`.
    pub key: String,
    /// What the pack holds.
    pub kind: DocumentKind,
    /// One summary per document.
    pub entries: Vec<DocumentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serde() {
        let json = serde_json::to_string(&DocumentKind::JournalEntry).unwrap();
        assert_eq!(json, "\"JournalEntry\"");
        let kind: DocumentKind = serde_json::from_str("\"Actor\"").unwrap();
        assert_eq!(kind, DocumentKind::Actor);
        let kind: DocumentKind = serde_json::from_str("\"Scene\"").unwrap();
        assert_eq!(kind, DocumentKind::Other("Scene".to_string()));
    }

    #[test]
    fn kind_display() {
        assert_eq!(DocumentKind::JournalEntry.to_string(), "JournalEntry");
        assert_eq!(DocumentKind::Other("Scene".into()).to_string(), "Scene");
    }

    #[test]
    fn document_without_content_deserializes() {
        let doc: EncounterDocument =
            serde_json::from_str(r#"{"id": "a1", "name": "Empty"}"#).unwrap();
        assert!(doc.content.is_empty());
        assert_eq!(doc.summary().name, "Empty");
    }
}
