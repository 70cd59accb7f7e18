//! Wordle TUI - CLI
//!
//! Terminal Wordle with a full-screen mode and a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use wordle_tui::{
    commands::run_simple,
    game::{GameConfig, Settings},
    interactive::{App, run_tui},
    wordlists::{DEFAULT_WORD_LEN, DEFAULT_WORDS, WordStore},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Word length
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LEN)]
    length: usize,

    /// Number of guesses
    #[arg(short, long, global = true, default_value_t = 6)]
    rows: usize,

    /// Start with hard mode on
    #[arg(long, global = true)]
    hard: bool,

    /// Seed for picking the secret word
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen game (default)
    Play,

    /// Line-based game without the alternate screen
    Simple,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Load the dictionary from `-d`, or the built-in list
fn load_store(dictionary: Option<&Path>, length: usize) -> Result<WordStore> {
    match dictionary {
        Some(path) => WordStore::load(path, length)
            .with_context(|| format!("Failed to load dictionary {}", path.display())),
        None => WordStore::from_words(DEFAULT_WORDS, length).with_context(|| {
            format!("Built-in dictionary has no {length}-letter words (use --dictionary)")
        }),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    anyhow::ensure!(cli.rows > 0, "--rows must be at least 1");

    let store = load_store(cli.dictionary.as_deref(), cli.length)?;
    let config = GameConfig { rows: cli.rows };
    let settings = Settings {
        hard_mode: cli.hard,
    };
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            info!("starting full-screen game");
            run_tui(App::new(&store, config, settings, rng))
        }
        Commands::Simple => {
            info!("starting line-based game");
            run_simple(&store, config, settings, &mut rng)
        }
    }
}
