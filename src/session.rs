//! Game session: one board, many rounds, alternating starters.

use derive_more::{Display, Error, From};
use tictac_core::{Board, Line, MoveError, Position, Side};
use tracing::{debug, info, instrument, warn};

/// What a single applied move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Round continues; the turn passed to the other side.
    Continue,
    /// The mover completed a line.
    Won {
        /// Winning side.
        side: Side,
        /// Cells to highlight.
        line: Line,
    },
    /// The board filled up with no winner.
    Tie,
}

/// Error raised when a move cannot be applied to the session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The board refused the placement.
    #[display("{_0}")]
    #[from]
    Move(MoveError),

    /// A side tried to move out of turn.
    #[display("It's not {got}'s turn ({expected} to move)")]
    WrongTurn {
        /// Side whose turn it is.
        expected: Side,
        /// Side that tried to move.
        got: Side,
    },

    /// The round has ended; call [`Session::next_round`] first.
    #[display("Round is over")]
    RoundOver,
}

/// Session state owned by the driver.
///
/// Enforces turn order on top of the raw [`Board`], records round results
/// in the board's scoreboard, and alternates which side opens each round.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    round_starter: Side,
    round: u32,
    round_over: bool,
}

impl Session {
    /// Starts a session whose first round is opened by `first`.
    #[instrument]
    pub fn new(first: Side) -> Self {
        let mut board = Board::new();
        board.set_turn(first);
        info!(starter = %first, "Session started");
        Self {
            board,
            round_starter: first,
            round: 1,
            round_over: false,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side that opened the current round.
    pub fn round_starter(&self) -> Side {
        self.round_starter
    }

    /// One-based number of the current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns `true` once the current round has a winner or a full board.
    pub fn is_round_over(&self) -> bool {
        self.round_over
    }

    /// Applies `side`'s mark at `(row, col)` and checks for a finished round.
    ///
    /// # Errors
    ///
    /// - [`SessionError::RoundOver`] if the round already ended
    /// - [`SessionError::WrongTurn`] if `side` is not to move
    /// - [`SessionError::Move`] if the cell is out of range or occupied
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn apply_move(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
    ) -> Result<TurnOutcome, SessionError> {
        if self.round_over {
            return Err(SessionError::RoundOver);
        }
        let expected = self.board.turn();
        if side != expected {
            warn!(%expected, got = %side, "Move out of turn");
            return Err(SessionError::WrongTurn {
                expected,
                got: side,
            });
        }

        self.board.place_mark(row, col, side)?;

        if let Some(line) = self.board.winning_line(side) {
            self.board.record_win(side);
            self.round_over = true;
            info!(winner = %side, "Round won");
            return Ok(TurnOutcome::Won { side, line });
        }
        if self.board.is_full() {
            self.board.record_tie();
            self.round_over = true;
            info!("Round tied");
            return Ok(TurnOutcome::Tie);
        }

        self.board.switch_turn();
        Ok(TurnOutcome::Continue)
    }

    /// Applies a move given as a named position.
    ///
    /// # Errors
    ///
    /// Same as [`Session::apply_move`].
    pub fn apply(&mut self, side: Side, pos: Position) -> Result<TurnOutcome, SessionError> {
        self.apply_move(side, pos.row(), pos.col())
    }

    /// Clears the board and hands the opening move to the side that did not
    /// open the previous round. Scores carry over.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn next_round(&mut self) {
        self.board.reset();
        self.round_starter = self.round_starter.opponent();
        self.board.set_turn(self.round_starter);
        self.round += 1;
        self.round_over = false;
        debug!(starter = %self.round_starter, "Starting player switched");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_turn_follows_starter() {
        let session = Session::new(Side::Computer);
        assert_eq!(session.board().turn(), Side::Computer);
        assert_eq!(session.round_starter(), Side::Computer);
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn test_wrong_turn_rejected_without_change() {
        let mut session = Session::new(Side::Player);
        let err = session.apply_move(Side::Computer, 0, 0).unwrap_err();
        assert_eq!(
            err,
            SessionError::WrongTurn {
                expected: Side::Player,
                got: Side::Computer
            }
        );
        assert_eq!(session.board().empty_positions().count(), 9);
    }

    #[test]
    fn test_invalid_cell_keeps_turn() {
        let mut session = Session::new(Side::Player);
        assert!(matches!(
            session.apply_move(Side::Player, 5, 5),
            Err(SessionError::Move(MoveError::InvalidMove { .. }))
        ));
        assert_eq!(session.board().turn(), Side::Player);
    }
}
