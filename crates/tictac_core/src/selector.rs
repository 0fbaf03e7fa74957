//! Heuristic move selection for the computer.
//!
//! The selector is greedy and looks one ply ahead at most: it takes an
//! immediate win, blocks an immediate loss, and otherwise falls back to
//! opening preferences. It does not defend against forks, so a careful
//! player can beat it.

use crate::board::Board;
use crate::error::MoveError;
use crate::position::Position;
use crate::types::Side;
use rand::{SeedableRng as _, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The rule that produced a move, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Tactic {
    /// Center reply to a single non-center opening mark.
    CenterResponse,
    /// Completes one of the computer's lines.
    Win,
    /// Occupies the cell that would complete one of the player's lines.
    Block,
    /// First empty corner in a freshly shuffled order.
    Corner,
    /// Center cell.
    Center,
    /// First empty cell in row-major order.
    FirstEmpty,
}

/// A chosen move and why it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell to play. Always empty on the board it was chosen for.
    pub position: Position,
    /// Rule that fired.
    pub tactic: Tactic,
}

impl Decision {
    fn new(position: Position, tactic: Tactic) -> Self {
        Self { position, tactic }
    }
}

/// Picks moves for [`Side::Computer`].
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rng: StdRng,
}

impl MoveSelector {
    /// Creates a selector seeded from the OS's random data source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a selector with a fixed seed, for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses the computer's next move.
    ///
    /// Only reads `board`. Call it on the computer's turn with at least one
    /// empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] if the board is full.
    #[instrument(skip_all, fields(turn = ?board.turn()))]
    pub fn select_move(&mut self, board: &Board) -> Result<Decision, MoveError> {
        let me = Side::Computer;
        let opponent = me.opponent();

        if let Some(pos) = center_response(board) {
            debug!(%pos, "Computer replying in the center");
            return Ok(Decision::new(pos, Tactic::CenterResponse));
        }

        if let Some(pos) = board.empty_positions().find(|&pos| board.wins_with(pos, me)) {
            debug!(%pos, "Computer found winning move");
            return Ok(Decision::new(pos, Tactic::Win));
        }

        if let Some(pos) = board
            .empty_positions()
            .find(|&pos| board.wins_with(pos, opponent))
        {
            debug!(%pos, "Computer blocking opponent move");
            return Ok(Decision::new(pos, Tactic::Block));
        }

        let mut corners = Position::CORNERS;
        corners.shuffle(&mut self.rng);
        if let Some(pos) = corners.into_iter().find(|&pos| board.cell(pos).is_empty()) {
            debug!(%pos, ?corners, "Computer prioritizing corner move");
            return Ok(Decision::new(pos, Tactic::Corner));
        }

        if board.cell(Position::Center).is_empty() {
            debug!("Computer playing in the center");
            return Ok(Decision::new(Position::Center, Tactic::Center));
        }

        if let Some(pos) = board.empty_positions().next() {
            debug!(%pos, "Computer playing at first empty spot");
            return Ok(Decision::new(pos, Tactic::FirstEmpty));
        }

        debug!("Computer did not find a valid move");
        Err(MoveError::NoLegalMove)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Center reply: computer to move, the player has exactly one mark, that
/// mark is off-center, and the center is free.
fn center_response(board: &Board) -> Option<Position> {
    if board.turn() != Side::Computer || !board.cell(Position::Center).is_empty() {
        return None;
    }
    let mut player_marks = board.marks_of(Side::Player);
    match (player_marks.next(), player_marks.next()) {
        (Some(only), None) if only != Position::Center => Some(Position::Center),
        _ => None,
    }
}
