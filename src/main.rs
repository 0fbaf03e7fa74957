//! tictac - console tic-tac-toe against the computer.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictac::{FirstEmpty, GameConfig, HeuristicAi, HumanInput, Orchestrator, Session, score_title};
use tictac_core::{MoveSelector, Side};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            first,
            seed,
            rounds,
        } => {
            let config = GameConfig::load_or_default(&config)?.with_overrides(first, seed, rounds);
            run_play(&config)
        }
        Command::Simulate { games, seed, first } => run_simulate(games, seed, first),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn selector(seed: Option<u64>) -> MoveSelector {
    seed.map_or_else(MoveSelector::new, MoveSelector::seeded)
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &GameConfig) -> Result<()> {
    info!(?config, "Starting interactive session");

    let human = HumanInput::new("Player", io::stdin().lock(), io::stdout());
    let computer = HeuristicAi::new("Computer", selector(*config.seed()));
    let session = Session::new(*config.first_player());

    let mut orchestrator = Orchestrator::new(session, Box::new(human), Box::new(computer), io::stdout())
        .with_max_rounds(*config.max_rounds());
    let scores = orchestrator.run()?;

    println!("\nFinal score: {}", score_title(&scores));
    Ok(())
}

/// Run heuristic-vs-first-empty rounds without interaction
#[instrument]
fn run_simulate(games: u32, seed: Option<u64>, first: Side) -> Result<()> {
    info!("Starting simulation");

    let player = FirstEmpty::new("FirstEmpty");
    let computer = HeuristicAi::new("Computer", selector(seed));
    let mut orchestrator =
        Orchestrator::new(Session::new(first), Box::new(player), Box::new(computer), io::sink())
            .with_max_rounds(Some(games));
    let scores = orchestrator.run()?;

    println!("{}", score_title(&scores));
    Ok(())
}
