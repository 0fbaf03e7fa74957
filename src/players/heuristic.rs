//! Computer opponent backed by the core move selector.

use super::{Choice, MoveSource};
use anyhow::Result;
use derive_new::new;
use tictac_core::{Board, MoveSelector};
use tracing::debug;

/// Plays the computer's side with [`MoveSelector`].
#[derive(Debug, Clone, new)]
pub struct HeuristicAi {
    #[new(into)]
    name: String,
    selector: MoveSelector,
}

impl MoveSource for HeuristicAi {
    fn choose(&mut self, board: &Board) -> Result<Choice> {
        let decision = self.selector.select_move(board)?;
        debug!(
            ai = %self.name,
            position = %decision.position,
            tactic = %decision.tactic,
            "Computer making move"
        );
        Ok(decision.position.into())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
