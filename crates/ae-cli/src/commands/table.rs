use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use ae_core::{CellRef, EncounterTable, KeyValueStore, Settings};
use ae_engine::{CellEdits, TableEditor, export_table, reset_to_default};

pub fn show(dir: &Path) -> Result<(), String> {
    let mut host = super::open_host(dir)?;
    let custom = has_custom_table(&mut host.store)?;
    let table = TableEditor::new(&mut host.store)
        .load()
        .map_err(|e| e.to_string())?;

    println!("{}", render(&table));
    println!();
    if custom {
        println!("  Custom encounter table");
    } else {
        println!("  Default encounter table (nothing saved yet)");
    }
    Ok(())
}

pub fn set(dir: &Path, row: i32, col: usize, label: &str) -> Result<(), String> {
    let mut host = super::open_host(dir)?;
    let mut edits = CellEdits::new();
    edits.insert(CellRef::new(row, col), label.to_string());

    let table = TableEditor::new(&mut host.store)
        .save(&edits)
        .map_err(|e| e.to_string())?;

    println!(
        "  R{row}C{col} = {}",
        table.get(row, col).unwrap_or_default()
    );
    println!("  Encounter table updated.");
    Ok(())
}

pub fn export(dir: &Path, output: Option<&Path>) -> Result<(), String> {
    let mut host = super::open_host(dir)?;
    let table = TableEditor::new(&mut host.store)
        .load()
        .map_err(|e| e.to_string())?;
    let json = export_table(&table).map_err(|e| e.to_string())?;

    if let Some(path) = output {
        std::fs::write(path, format!("{json}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

pub fn import(dir: &Path, file: &Path) -> Result<(), String> {
    let mut host = super::open_host(dir)?;
    let raw = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;

    TableEditor::new(&mut host.store)
        .import_table(&raw)
        .map_err(|e| format!("failed to import table: {e}"))?;

    println!("  Encounter table imported.");
    Ok(())
}

pub fn reset(dir: &Path) -> Result<(), String> {
    let mut host = super::open_host(dir)?;
    TableEditor::new(&mut host.store)
        .store(&reset_to_default())
        .map_err(|e| e.to_string())?;

    println!("  Encounter table reset to default.");
    Ok(())
}

fn has_custom_table<S: KeyValueStore>(store: &mut S) -> Result<bool, String> {
    let raw = Settings::new(store).raw_table().map_err(|e| e.to_string())?;
    Ok(EncounterTable::from_value(&raw).is_ok())
}

fn render(table: &EncounterTable) -> Table {
    let mut grid = Table::new();
    grid.set_content_arrangement(ContentArrangement::Dynamic);
    grid.set_header(vec!["Roll", "1", "2", "3", "4"]);
    for (row, labels) in table.rows() {
        let mut cells = vec![row.to_string()];
        cells.extend(labels.iter().cloned());
        grid.add_row(cells);
    }
    grid
}
