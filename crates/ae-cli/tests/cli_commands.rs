//! Integration tests for the `ae` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp data directory with the sample table and documents.
fn sample_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    ae(dir.path()).arg("init").assert().success();
    dir
}

fn ae(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ae").unwrap();
    cmd.arg("--data").arg(data);
    cmd
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_data_directory() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("campaign");
    ae(dir.path())
        .arg("init")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created encounter data"));

    assert!(target.join("settings.json").exists());
    assert!(target.join("packs/encounters.menador.json").exists());
    assert!(target.join("journals/Encounters/Merchant Caravan.md").exists());
    assert!(target.join("encounter-type-table.json").exists());
}

#[test]
fn init_refuses_existing_settings() {
    let dir = sample_data();
    ae(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_data_directory_fails() {
    let dir = TempDir::new().unwrap();
    ae(&dir.path().join("nowhere"))
        .args(["table", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ---------------------------------------------------------------------------
// table
// ---------------------------------------------------------------------------

#[test]
fn table_show_defaults_when_nothing_saved() {
    let dir = TempDir::new().unwrap();
    ae(dir.path())
        .args(["table", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uneventful"))
        .stdout(predicate::str::contains("Default encounter table"));
}

#[test]
fn table_show_sample() {
    let dir = sample_data();
    ae(dir.path())
        .args(["table", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ambush"))
        .stdout(predicate::str::contains("Custom encounter table"));
}

#[test]
fn table_set_updates_cell() {
    let dir = sample_data();
    ae(dir.path())
        .args(["table", "set", "7", "2", "  Dragon  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("R7C2 = Dragon"));

    ae(dir.path())
        .args(["table", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Dragon\""));
}

#[test]
fn table_set_rejects_blank_label() {
    let dir = sample_data();
    ae(dir.path())
        .args(["table", "set", "7", "2", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    ae(dir.path())
        .args(["table", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Merchant\""));
}

#[test]
fn table_set_rejects_out_of_range_cell() {
    let dir = sample_data();
    ae(dir.path())
        .args(["table", "set", "17", "1", "Ambush"])
        .assert()
        .failure();
    ae(dir.path())
        .args(["table", "set", "5", "0", "Ambush"])
        .assert()
        .failure();
}

#[test]
fn table_export_import_between_directories() {
    let source = sample_data();
    let file = source.path().join("table.json");
    ae(source.path())
        .args(["table", "export", "--output"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let target = TempDir::new().unwrap();
    ae(target.path())
        .args(["table", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("imported"));

    ae(target.path())
        .args(["table", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ambush"))
        .stdout(predicate::str::contains("Custom encounter table"));
}

#[test]
fn table_import_rejects_incomplete_table() {
    let dir = sample_data();
    let file = dir.path().join("partial.json");
    fs::write(&file, r#"{"3": ["A", "B", "C", "D"]}"#).unwrap();

    ae(dir.path())
        .args(["table", "import"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to import table"));

    ae(dir.path())
        .args(["table", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Ambush\""));
}

#[test]
fn table_reset_restores_default() {
    let dir = sample_data();
    ae(dir.path()).args(["table", "reset"]).assert().success();
    ae(dir.path())
        .args(["table", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ambush").not());
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_show_sample() {
    let dir = sample_data();
    ae(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compendium"))
        .stdout(predicate::str::contains("encounters.menador"))
        .stdout(predicate::str::contains("encounter types: 5"));
}

#[test]
fn config_source_switches_to_journal() {
    let dir = sample_data();
    ae(dir.path())
        .args(["config", "source", "journal", "Encounters"])
        .assert()
        .success();
    ae(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("journal"))
        .stdout(predicate::str::contains("Encounters"));
}

#[test]
fn config_source_rejects_unknown_kind() {
    let dir = sample_data();
    ae(dir.path())
        .args(["config", "source", "scroll", "Encounters"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected: compendium, journal"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_with_manual_dice_from_compendium() {
    let dir = sample_data();
    // 2+3+1 = 6, terrain +1 -> row 7, column 2: Merchant
    ae(dir.path())
        .args(["roll", "--dice", "2,3,1", "--terrain", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R7C2"))
        .stdout(predicate::str::contains("Merchant Caravan"))
        .stdout(predicate::str::contains("A crossroads shrine"))
        .stdout(predicate::str::contains("Caravan Guard x 2"));
}

#[test]
fn roll_with_flags_lowers_row() {
    let dir = sample_data();
    // 3+3+3 = 9, hide tracks -1 -> row 8, column 3: Patrol
    ae(dir.path())
        .args(["roll", "--dice", "3,3,3", "--hide-tracks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R8C3"))
        .stdout(predicate::str::contains("Patrol at the Border Stones"));
}

#[test]
fn roll_from_journal_folder() {
    let dir = sample_data();
    ae(dir.path())
        .args(["config", "source", "journal", "Encounters"])
        .assert()
        .success();
    ae(dir.path())
        .args(["roll", "--dice", "2,3,1", "--terrain", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merchant Caravan"));
}

#[test]
fn roll_off_table_is_uneventful() {
    let dir = sample_data();
    ae(dir.path())
        .args(["roll", "--dice", "1,1,1", "--manual-alarm", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R-2C1"))
        .stdout(predicate::str::contains("Uneventful"));
}

#[test]
fn roll_with_huge_dice_stays_off_table() {
    let dir = sample_data();
    // 1 + MAX + MAX + 10 wraps to row 9 (Patrol) in 32-bit arithmetic.
    ae(dir.path())
        .args(["roll", "--dice", "1,2147483647,2147483647", "--terrain", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uneventful"))
        .stdout(predicate::str::contains("Patrol").not());
}

#[test]
fn roll_miss_warns_and_succeeds() {
    let dir = sample_data();
    ae(dir.path())
        .args(["table", "set", "7", "2", "Dragon"])
        .assert()
        .success();
    ae(dir.path())
        .args(["roll", "--dice", "2,3,1", "--terrain", "1", "--send"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No journal entry found for R7C2"));

    assert!(!dir.path().join("chat.jsonl").exists());
}

#[test]
fn roll_rejects_wrong_dice_count() {
    let dir = sample_data();
    ae(dir.path())
        .args(["roll", "--dice", "2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly three values"));
}

#[test]
fn seeded_rolls_repeat() {
    let dir = sample_data();
    let first = ae(dir.path())
        .args(["roll", "--seed", "42", "--terrain", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = ae(dir.path())
        .args(["roll", "--seed", "42", "--terrain", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// chat
// ---------------------------------------------------------------------------

#[test]
fn chat_empty() {
    let dir = sample_data();
    ae(dir.path())
        .arg("chat")
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages yet"));
}

#[test]
fn roll_send_posts_whisper() {
    let dir = sample_data();
    ae(dir.path())
        .args(["roll", "--dice", "2,3,1", "--terrain", "1", "--send", "--user", "gm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sent to chat."));

    ae(dir.path())
        .arg("chat")
        .assert()
        .success()
        .stdout(predicate::str::contains("to gm"))
        .stdout(predicate::str::contains("<h2>Merchant Caravan</h2>"))
        .stdout(predicate::str::contains(
            "<p><strong>Location:</strong> A crossroads shrine</p>",
        ));
}
