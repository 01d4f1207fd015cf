use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ae_core::catalog::CATALOG_FILE;
use ae_core::{DocumentKind, EncounterDocument, EncounterTable, Settings, SourceSettings};

use crate::host::SETTINGS_FILE;
use crate::host::documents::PackFile;
use crate::host::settings_file::FileStore;

/// Sample table rows: quiet roads low, trouble high.
const SAMPLE_ROWS: [(i32, [&str; 4]); 14] = [
    (3, ["Uneventful", "Uneventful", "Uneventful", "Uneventful"]),
    (4, ["Uneventful", "Uneventful", "Uneventful", "Uneventful"]),
    (5, ["Uneventful", "Merchant", "Uneventful", "Uneventful"]),
    (6, ["Uneventful", "Merchant", "Patrol", "Uneventful"]),
    (7, ["Uneventful", "Merchant", "Patrol", "Uneventful"]),
    (8, ["Patrol", "Merchant", "Patrol", "Beasts"]),
    (9, ["Patrol", "Ambush", "Merchant", "Beasts"]),
    (10, ["Patrol", "Ambush", "Merchant", "Beasts"]),
    (11, ["Beasts", "Ambush", "Patrol", "Beasts"]),
    (12, ["Ambush", "Beasts", "Ambush", "Patrol"]),
    (13, ["Ambush", "Beasts", "Ambush", "Patrol"]),
    (14, ["Ambush", "Ambush", "Beasts", "Ambush"]),
    (15, ["Ambush", "Ambush", "Ambush", "Ambush"]),
    (16, ["Ambush", "Ambush", "Ambush", "Ambush"]),
];

const SAMPLE_DOCUMENTS: [(&str, &str, &str); 5] = [
    (
        "enc-uneventful-road",
        "Uneventful: A Quiet Road",
        "**Type:** Uneventful\n\
         **Location:** The old trade road\n\
         **Description:** The day passes without incident. Birdsong and dust.",
    ),
    (
        "enc-merchant-caravan",
        "Merchant Caravan",
        "**Type:** Merchant\n\
         **Location:** A crossroads shrine\n\
         @UUID[Actor.merchant01]{Travelling Merchant}\n\
         @UUID[Actor.guard01]{Caravan Guard} x 2\n\
         **Description:** A small caravan has stopped to water its mules.",
    ),
    (
        "enc-border-patrol",
        "Patrol at the Border Stones",
        "**Type:** Patrol\n\
         **Location:** The border stones\n\
         @UUID[Actor.soldier01]{Soldier} x 4\n\
         @UUID[Actor.sergeant01]{Sergeant}\n\
         **Description:** A patrol demands to see travel papers.",
    ),
    (
        "enc-ravine-ambush",
        "Ambush in the Ravine",
        "**Type:** Ambush\n\
         **Location:** A narrow ravine\n\
         @UUID[Actor.bandit01]{Bandit} x 3\n\
         @UUID[Actor.bandit02]{Bandit Captain}\n\
         **Description:** Rocks tumble down the slope as bandits close in.",
    ),
    (
        "enc-wolf-pack",
        "Beasts: Wolf Pack",
        "**Type:** Beasts\n\
         **Location:** Pine forest at dusk\n\
         @UUID[Actor.wolf01]{Wolf} x 5\n\
         **Description:** Howls answer each other through the trees.",
    ),
];

const SAMPLE_CATALOG: &str = r#"{
  "Uneventful": { "danger": 0 },
  "Merchant": { "danger": 0 },
  "Patrol": { "danger": 1 },
  "Beasts": { "danger": 2 },
  "Ambush": { "danger": 3 }
}
"#;

pub fn run(dir: &Path) -> Result<(), String> {
    if dir.join(SETTINGS_FILE).exists() {
        return Err(format!(
            "'{}' already exists and holds settings",
            dir.display()
        ));
    }

    fs::create_dir_all(dir.join("packs")).map_err(|e| format!("cannot create directory: {e}"))?;
    fs::create_dir_all(dir.join("journals/Encounters"))
        .map_err(|e| format!("cannot create directory: {e}"))?;

    let documents: Vec<EncounterDocument> = SAMPLE_DOCUMENTS
        .iter()
        .map(|(id, name, content)| EncounterDocument::new(*id, *name, *content))
        .collect();

    let pack = PackFile {
        kind: DocumentKind::JournalEntry,
        documents: documents.clone(),
    };
    let pack_json = serde_json::to_string_pretty(&pack)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    let source = SourceSettings::default();
    fs::write(dir.join(format!("packs/{}.json", source.key)), pack_json)
        .map_err(|e| format!("cannot write pack: {e}"))?;

    for doc in &documents {
        fs::write(
            dir.join("journals/Encounters").join(format!("{}.md", doc.name.replace(':', ""))),
            &doc.content,
        )
        .map_err(|e| format!("cannot write journal entry: {e}"))?;
    }

    fs::write(dir.join(CATALOG_FILE), SAMPLE_CATALOG)
        .map_err(|e| format!("cannot write {CATALOG_FILE}: {e}"))?;

    let mut store =
        FileStore::open(&dir.join(SETTINGS_FILE)).map_err(|e| format!("cannot open settings: {e}"))?;
    let mut settings = Settings::new(&mut store);
    settings
        .set_source(&source)
        .map_err(|e| format!("cannot write settings: {e}"))?;
    settings
        .set_table(&sample_table()?)
        .map_err(|e| format!("cannot write settings: {e}"))?;

    println!("Created encounter data in {}/", dir.display());
    println!("  {SETTINGS_FILE}                source and encounter table");
    println!("  packs/{}.json  sample compendium", source.key);
    println!("  journals/Encounters/          sample journal folder");
    println!("  {CATALOG_FILE}    encounter types");
    println!();
    println!("Get started:");
    println!("  ae -d {} table show", dir.display());
    println!("  ae -d {} roll --terrain 1 --party 1", dir.display());

    Ok(())
}

fn sample_table() -> Result<EncounterTable, String> {
    let rows: BTreeMap<i32, [String; 4]> = SAMPLE_ROWS
        .iter()
        .map(|(row, labels)| (*row, labels.map(str::to_string)))
        .collect();
    EncounterTable::from_rows(rows).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_table_is_valid() {
        let table = sample_table().unwrap();
        assert_eq!(table.get(9, 2), Some("Ambush"));
        assert_eq!(table.get(3, 1), Some("Uneventful"));
    }

    #[test]
    fn every_sample_label_has_a_document() {
        let table = sample_table().unwrap();
        for label in table.labels() {
            assert!(
                SAMPLE_DOCUMENTS
                    .iter()
                    .any(|(_, name, content)| name.contains(label)
                        && content.contains(&format!("**Type:** {label}"))),
                "no sample document for {label}"
            );
        }
    }
}
