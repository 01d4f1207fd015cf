//! CLI host for the Alarm Encounter engine: edit the encounter table, point
//! it at a journal folder or compendium pack, and roll travel encounters.

mod commands;
mod host;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::roll::RollOptions;

#[derive(Parser)]
#[command(
    name = "ae",
    about = "Alarm-based random encounters for overland travel",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data directory holding settings, journals, packs, and the chat log
    #[arg(short, long, global = true, default_value = ".")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a data directory with a sample table and encounter documents
    Init {
        /// Directory to create (default: the data directory)
        dir: Option<PathBuf>,
    },

    /// View or edit the encounter table
    Table {
        #[command(subcommand)]
        action: TableAction,
    },

    /// View or change where encounter documents come from
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Roll a travel encounter
    Roll {
        /// Terrain modifier
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        terrain: i32,

        /// Party size modifier
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        party: i32,

        /// The party hides its tracks (-1)
        #[arg(long)]
        hide_tracks: bool,

        /// The party travels slowly (-1)
        #[arg(long)]
        slow_travel: bool,

        /// Extra alarm adjustment
        #[arg(short, long, allow_negative_numbers = true)]
        manual_alarm: Option<i32>,

        /// Dice rolled at the table, e.g. 2,3,1
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        dice: Option<Vec<i32>>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Whisper the encounter to the chat log
        #[arg(long)]
        send: bool,

        /// User the chat message is whispered to
        #[arg(long, default_value = "gamemaster")]
        user: String,
    },

    /// Show messages posted to the chat log
    Chat,
}

#[derive(Subcommand)]
enum TableAction {
    /// Print the table
    Show,

    /// Set one cell
    Set {
        /// Row (3-16)
        row: i32,
        /// Column (1-4)
        col: usize,
        /// Encounter type label
        label: String,
    },

    /// Print the table as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the table with one read from a JSON file
    Import {
        /// JSON file to import
        file: PathBuf,
    },

    /// Replace the table with the default all-Uneventful table
    Reset,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the document source
    Show,

    /// Set the document source
    Source {
        /// compendium or journal
        kind: String,
        /// Pack key or journal folder name
        key: String,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let dir = cli.data;
    let result = match cli.command {
        Commands::Init { dir: target } => commands::init::run(target.as_deref().unwrap_or(&dir)),
        Commands::Table { action } => match action {
            TableAction::Show => commands::table::show(&dir),
            TableAction::Set { row, col, label } => commands::table::set(&dir, row, col, &label),
            TableAction::Export { output } => commands::table::export(&dir, output.as_deref()),
            TableAction::Import { file } => commands::table::import(&dir, &file),
            TableAction::Reset => commands::table::reset(&dir),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&dir),
            ConfigAction::Source { kind, key } => commands::config::source(&dir, &kind, &key),
        },
        Commands::Roll {
            terrain,
            party,
            hide_tracks,
            slow_travel,
            manual_alarm,
            dice,
            seed,
            send,
            user,
        } => commands::roll::run(
            &dir,
            &RollOptions {
                terrain,
                party,
                hide_tracks,
                slow_travel,
                manual_alarm,
                dice,
                seed,
                send,
                user,
            },
        ),
        Commands::Chat => commands::chat::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
