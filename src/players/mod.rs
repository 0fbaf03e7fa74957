//! Move sources: where each side's moves come from.

mod first_empty;
mod heuristic;
mod human;

pub use first_empty::FirstEmpty;
pub use heuristic::HeuristicAi;
pub use human::HumanInput;

use anyhow::Result;
use tictac_core::{Board, Position};

/// A move request answered by a [`MoveSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Play at `(row, col)`. Coordinates are not validated yet.
    Cell {
        /// Row, 0-based.
        row: usize,
        /// Column, 0-based.
        col: usize,
    },
    /// Stop the session.
    Quit,
}

impl From<Position> for Choice {
    fn from(pos: Position) -> Self {
        Choice::Cell {
            row: pos.row(),
            col: pos.col(),
        }
    }
}

/// Anything that can decide a move for one side.
pub trait MoveSource {
    /// Decides the next move on `board`.
    fn choose(&mut self, board: &Board) -> Result<Choice>;

    /// Display name used in announcements and logs.
    fn name(&self) -> &str;

    /// Told when its last choice was refused. The default ignores it.
    fn rejected(&mut self, _reason: &str) -> Result<()> {
        Ok(())
    }
}
