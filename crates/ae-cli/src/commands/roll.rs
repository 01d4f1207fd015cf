use std::path::Path;

use colored::Colorize;

use ae_engine::{
    DiceInput, EngineConfig, ModifierSet, Preview, ResolvedEncounter, Resolver, SituationalFlag,
};

/// Options for a single travel roll.
pub struct RollOptions {
    pub terrain: i32,
    pub party: i32,
    pub hide_tracks: bool,
    pub slow_travel: bool,
    pub manual_alarm: Option<i32>,
    pub dice: Option<Vec<i32>>,
    pub seed: Option<u64>,
    pub send: bool,
    pub user: String,
}

impl RollOptions {
    fn modifiers(&self) -> ModifierSet {
        let mut modifiers = ModifierSet::new(self.terrain, self.party);
        if self.hide_tracks {
            modifiers = modifiers.with_flag(SituationalFlag::HideTracks);
        }
        if self.slow_travel {
            modifiers = modifiers.with_flag(SituationalFlag::SlowTravel);
        }
        if let Some(manual) = self.manual_alarm {
            modifiers = modifiers.with_manual(manual);
        }
        modifiers
    }

    fn dice_input(&self) -> Result<DiceInput, String> {
        match self.dice.as_deref() {
            None => Ok(DiceInput::Random),
            Some(&[d1, d2, d3]) => Ok(DiceInput::Manual(d1, d2, d3)),
            Some(values) => Err(format!(
                "--dice takes exactly three values, got {}",
                values.len()
            )),
        }
    }

    fn config(&self) -> EngineConfig {
        let config = EngineConfig::default().with_user(self.user.as_str());
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

pub fn run(dir: &Path, options: &RollOptions) -> Result<(), String> {
    let mut host = super::open_host(dir)?;
    let config = options.config();
    let modifiers = options.modifiers();
    let dice_input = options.dice_input()?;

    let encounter = Resolver::new(&mut host.store, &host.documents, config.rng())
        .resolve(&modifiers, dice_input)
        .map_err(|e| e.to_string())?;

    print_roll(&encounter);

    if encounter.is_miss() {
        eprintln!("{}", format!("warning: {}", encounter.miss_message()).yellow());
        return Ok(());
    }

    let preview = Preview::new(encounter).map_err(|e| e.to_string())?;
    print_preview(&preview);

    if options.send {
        preview
            .confirm(&mut host.chat, &config.user)
            .map_err(|e| e.to_string())?;
        println!("  {}", "Sent to chat.".green());
    } else {
        preview.cancel();
    }
    Ok(())
}

fn print_roll(encounter: &ResolvedEncounter) {
    println!(
        "  {} {}  alarm {:+}",
        "Roll:".bold(),
        encounter.dice,
        encounter.alarm_level
    );
    println!(
        "  {} R{}C{}  {}",
        "Cell:".bold(),
        encounter.row,
        encounter.col,
        encounter.encounter_type.cyan()
    );
    println!();
}

fn print_preview(preview: &Preview) {
    let encounter = preview.encounter();
    if let Some(doc) = &encounter.document {
        println!("  {}", doc.name.bold());
    }
    println!("  type:     {}", encounter.encounter_type);
    println!("  location: {}", encounter.location);
    if encounter.actors.is_empty() {
        println!("  actors:   {}", "none".dimmed());
    } else {
        println!("  actors:");
        for actor in &encounter.actors {
            println!("    {} x {}", actor.name, actor.quantity);
        }
    }
    println!();
    for line in encounter.description.lines() {
        println!("  {}", line.trim());
    }
    println!();
}
