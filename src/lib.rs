//! Console tic-tac-toe against a heuristic computer opponent.
//!
//! The pure game logic lives in `tictac_core`. This crate is the driver:
//!
//! - **Session**: owns the board, enforces turn order, keeps score and
//!   alternates the opening side between rounds
//! - **Players**: move sources for the human (console input) and the
//!   computer (heuristic), plus a naive first-empty opponent
//! - **Orchestrator**: sequences moves, checks for the end of a round and
//!   writes the board, announcements and score line
//! - **Config**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod session;
mod ui;

pub use config::{ConfigError, GameConfig};
pub use orchestrator::{Orchestrator, RoundResult};
pub use players::{Choice, FirstEmpty, HeuristicAi, HumanInput, MoveSource};
pub use session::{Session, SessionError, TurnOutcome};
pub use ui::{outcome_message, render_board, score_title};
