//! Encounter resolution: modifiers and dice to a table cell, then a document.

use rand::Rng;
use serde::{Deserialize, Serialize};

use ae_core::{EncounterDocument, EncounterTable, KeyValueStore, Settings, UNEVENTFUL};

use crate::dice::{DiceInput, DiceResult, roll_dice};
use crate::editor::TableEditor;
use crate::error::EngineResult;
use crate::extract::{ActorRef, extract_fields};
use crate::lookup::{DocumentSource, DocumentStore};
use crate::modifiers::{ModifierSet, compute_alarm_level};

/// The label at (`row`, `col`), or "Uneventful" for any cell outside the
/// table. Rolls that modifiers push off the table are not an error.
pub fn lookup_cell(table: &EncounterTable, row: i64, col: i32) -> &str {
    let Ok(row) = i32::try_from(row) else {
        return UNEVENTFUL;
    };
    usize::try_from(col)
        .ok()
        .and_then(|col| table.get(row, col))
        .unwrap_or(UNEVENTFUL)
}

/// The outcome of one travel roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEncounter {
    /// Encounter type from the table cell.
    pub encounter_type: String,
    /// Sum of all modifiers.
    pub alarm_level: i64,
    /// The three dice.
    pub dice: DiceResult,
    /// Dice sum plus alarm level.
    pub row: i64,
    /// Value of the first die.
    pub col: i32,
    /// The matched document, or `None` when nothing matched.
    pub document: Option<EncounterDocument>,
    /// Location from the document.
    pub location: String,
    /// Actor references from the document.
    pub actors: Vec<ActorRef>,
    /// Description from the document.
    pub description: String,
}

impl ResolvedEncounter {
    /// Whether no document was found for the encounter type.
    pub fn is_miss(&self) -> bool {
        self.document.is_none()
    }

    /// The warning shown when no document was found.
    pub fn miss_message(&self) -> String {
        format!("No journal entry found for R{}C{}", self.row, self.col)
    }
}

/// Resolves travel rolls against the stored table and a document store.
pub struct Resolver<'a, S, D, R>
where
    S: KeyValueStore + ?Sized,
    D: DocumentStore + ?Sized,
    R: Rng,
{
    store: &'a mut S,
    documents: &'a D,
    rng: R,
}

impl<'a, S, D, R> Resolver<'a, S, D, R>
where
    S: KeyValueStore + ?Sized,
    D: DocumentStore + ?Sized,
    R: Rng,
{
    /// Create a resolver over a settings store, a document store, and a
    /// random number generator.
    pub fn new(store: &'a mut S, documents: &'a D, rng: R) -> Self {
        Self {
            store,
            documents,
            rng,
        }
    }

    /// Roll (or take) the dice, find the table cell, and look up a document.
    ///
    /// A lookup miss is returned as a [`ResolvedEncounter`] with no document
    /// and empty fields; see [`ResolvedEncounter::is_miss`].
    pub fn resolve(
        &mut self,
        modifiers: &ModifierSet,
        dice_input: DiceInput,
    ) -> EngineResult<ResolvedEncounter> {
        let alarm_level = compute_alarm_level(modifiers);
        let dice = roll_dice(dice_input, &mut self.rng);
        let row = dice.final_row(alarm_level);
        let col = dice.final_column();

        let table = TableEditor::new(&mut *self.store).load()?;
        let encounter_type = lookup_cell(&table, row, col).to_string();
        log::debug!("roll {dice} alarm {alarm_level} -> R{row}C{col} ({encounter_type})");

        let source = DocumentSource::from(&Settings::new(&mut *self.store).source()?);
        let document = source.find_by_type(&encounter_type, self.documents, &mut self.rng);

        let (location, actors, description) = match &document {
            Some(doc) => {
                let fields = extract_fields(&doc.content);
                (fields.location, fields.actors, fields.description)
            }
            None => (String::new(), Vec::new(), String::new()),
        };

        Ok(ResolvedEncounter {
            encounter_type,
            alarm_level,
            dice,
            row,
            col,
            document,
            location,
            actors,
            description,
        })
    }
}
