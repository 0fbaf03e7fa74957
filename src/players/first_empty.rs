//! Naive opponent that takes the first open cell.

use super::{Choice, MoveSource};
use anyhow::Result;
use tictac_core::Board;
use tracing::debug;

/// Picks the first empty cell in row-major order.
#[derive(Debug, Clone)]
pub struct FirstEmpty {
    name: String,
}

impl FirstEmpty {
    /// Creates a new first-empty player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSource for FirstEmpty {
    fn choose(&mut self, board: &Board) -> Result<Choice> {
        let Some(pos) = board.empty_positions().next() else {
            anyhow::bail!("No valid moves available")
        };
        debug!(player = %self.name, %pos, "First-empty player chose position");
        Ok(pos.into())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
