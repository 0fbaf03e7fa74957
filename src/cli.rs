//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use tictac_core::Side;

/// Tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file (optional; defaults apply if missing)
        #[arg(short, long, default_value = "tictac.toml")]
        config: std::path::PathBuf,

        /// Side that opens the first round (player or computer)
        #[arg(long)]
        first: Option<Side>,

        /// Seed for the computer's random corner choice
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many rounds
        #[arg(long)]
        rounds: Option<u32>,
    },

    /// Pit the heuristic against a first-empty-cell opponent
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the computer's random corner choice
        #[arg(long)]
        seed: Option<u64>,

        /// Side that opens the first round
        #[arg(long, default_value = "player")]
        first: Side,
    },
}
