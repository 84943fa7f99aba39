//! Wheel of Fortune on the terminal.
//!
//! Wires stdin/stdout into the core `GameManager`. Logs go to stderr so they
//! never interleave with the game itself.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wof_core::io::{ConsoleInput, ConsoleOutput};
use wof_core::{GameConfig, GameManagerBuilder};

#[derive(Parser)]
#[command(name = "wheel-of-fortune")]
#[command(about = "Spin the wheel, guess letters, solve the puzzle")]
struct Args {
    /// JSON game config (rounds, solve_bonus, puzzles, seed)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of solved rounds before the game ends
    #[arg(long)]
    rounds: Option<u32>,

    /// Seed the wheel for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Log round and game events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    info!(rounds = config.rounds, puzzles = config.puzzles.len(), "starting game");

    let mut manager = GameManagerBuilder::new()
        .input(ConsoleInput::stdin())
        .output(ConsoleOutput::stdout())
        .config(config)
        .build()
        .context("invalid game configuration")?;

    let summary = manager.start_game()?;
    info!(winners = ?summary.winners, "game finished");
    Ok(())
}
