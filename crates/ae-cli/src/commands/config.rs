use std::path::Path;

use ae_core::{Settings, SourceKind, SourceSettings};

pub fn show(dir: &Path) -> Result<(), String> {
    let mut host = super::open_host(dir)?;
    let source = Settings::new(&mut host.store)
        .source()
        .map_err(|e| e.to_string())?;

    println!("  source type:     {}", source.kind);
    println!("  source key:      {}", source.key);
    println!("  encounter types: {}", host.catalog.len());
    Ok(())
}

pub fn source(dir: &Path, kind: &str, key: &str) -> Result<(), String> {
    let mut host = super::open_host(dir)?;
    let kind: SourceKind = kind.parse().map_err(|e: ae_core::AeError| {
        format!("{e} (expected: compendium, journal)")
    })?;
    let source = SourceSettings {
        kind,
        key: key.to_string(),
    };
    Settings::new(&mut host.store)
        .set_source(&source)
        .map_err(|e| e.to_string())?;

    println!("  Encounters now come from {kind} \"{}\".", key.trim());
    Ok(())
}
