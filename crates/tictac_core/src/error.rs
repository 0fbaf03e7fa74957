//! Move errors.

use derive_more::{Display, Error};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidReason {
    /// Row or column outside 0-2.
    #[display("out of range")]
    OutOfRange,
    /// The cell already holds a mark.
    #[display("already occupied")]
    Occupied,
}

/// Error that can occur when placing or choosing a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell is out of range or occupied. The board is unchanged.
    #[display("Invalid move at ({row}, {col}): cell is {reason}")]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Why the move was refused.
        reason: InvalidReason,
    },

    /// The selector was asked for a move on a full board.
    #[display("No legal move: the board is full")]
    NoLegalMove,
}

impl MoveError {
    /// Returns `true` if the move targeted an occupied cell.
    pub fn is_occupied(&self) -> bool {
        matches!(
            self,
            MoveError::InvalidMove {
                reason: InvalidReason::Occupied,
                ..
            }
        )
    }
}
