//! The 3×3 board, turn tracking and score counters.

use crate::error::{InvalidReason, MoveError};
use crate::position::{Position, SIZE};
use crate::rules::{self, Line};
use crate::types::{Cell, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Round results accumulated over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    player_wins: u32,
    computer_wins: u32,
    ties: u32,
}

impl Scoreboard {
    /// Rounds won by the human player.
    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Rounds won by the computer.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Rounds that ended with a full board and no winner.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Wins recorded for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_wins,
            Side::Computer => self.computer_wins,
        }
    }

    /// Total rounds recorded.
    pub fn rounds(&self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }
}

/// Everything a front end needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Cells by row, then column.
    pub rows: [[Cell; SIZE]; SIZE],
    /// Side to move.
    pub turn: Side,
    /// Session scores.
    pub scores: Scoreboard,
    /// Side holding a complete line, if any.
    pub winner: Option<Side>,
    /// The line to highlight when there is a winner.
    pub winning_line: Option<Line>,
}

/// 3×3 tic-tac-toe board with whose-turn tracking and session scores.
///
/// The board does not enforce turn order: [`Board::place_mark`] writes any
/// side's mark into any empty cell. Sequencing is the driver's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    turn: Side,
    scores: Scoreboard,
}

impl Board {
    /// Creates an empty board with the player to move and zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        debug!("Board initialized");
        Self {
            cells: [Cell::Empty; 9],
            turn: Side::Player,
            scores: Scoreboard::default(),
        }
    }

    /// Gets the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns the cell at `(row, col)`, `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.cell(pos))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Grid copy, by row then column.
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.cell(pos);
        }
        rows
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Session scores.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Places `side`'s mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the cell is out of range or
    /// already occupied. The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, side: Side) -> Result<Position, MoveError> {
        let Some(pos) = Position::from_row_col(row, col) else {
            warn!(row, col, ?side, "Move out of range");
            return Err(MoveError::InvalidMove {
                row,
                col,
                reason: InvalidReason::OutOfRange,
            });
        };
        if !self.cell(pos).is_empty() {
            debug!(row, col, ?side, "Invalid move attempted on occupied cell");
            return Err(MoveError::InvalidMove {
                row,
                col,
                reason: InvalidReason::Occupied,
            });
        }
        self.cells[pos.to_index()] = Cell::Marked(side);
        debug!(row, col, ?side, "Move made");
        Ok(pos)
    }

    /// Places `side`'s mark at a named position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the cell is occupied.
    pub fn place(&mut self, pos: Position, side: Side) -> Result<Position, MoveError> {
        self.place_mark(pos.row(), pos.col(), side)
    }

    /// Returns `true` iff `(row, col)` is in range and empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_empty)
    }

    /// Returns `true` iff any line is fully held by `side`.
    pub fn is_winner(&self, side: Side) -> bool {
        self.winning_line(side).is_some()
    }

    /// First line fully held by `side`: rows, columns, main diagonal,
    /// anti-diagonal.
    pub fn winning_line(&self, side: Side) -> Option<Line> {
        rules::first_line_held(&self.cells, side)
    }

    /// Side holding a complete line, checking the player first.
    pub fn winner(&self) -> Option<Side> {
        [Side::Player, Side::Computer]
            .into_iter()
            .find(|&side| self.is_winner(side))
    }

    /// Returns `true` iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` once a side has won or the board is full.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Would `side` complete a line by occupying `pos`?
    ///
    /// Probes a copy of the grid; `self` is never written. Occupied cells
    /// always answer `false`.
    pub fn wins_with(&self, pos: Position, side: Side) -> bool {
        if !self.cell(pos).is_empty() {
            return false;
        }
        let mut trial = self.cells;
        trial[pos.to_index()] = Cell::Marked(side);
        rules::first_line_held(&trial, side).is_some()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.cell(pos).is_empty())
    }

    /// Positions marked by `side`, in row-major order.
    pub fn marks_of(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.cell(pos) == Cell::Marked(side))
    }

    /// Toggles the side to move.
    #[instrument(skip(self), fields(from = ?self.turn))]
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
        debug!(turn = ?self.turn, "Turn switched");
    }

    /// Hands the move to `side`.
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    /// Clears all nine cells. Scores and turn are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
        debug!("Board reset");
    }

    /// Counts a round won by the player.
    pub fn record_player_win(&mut self) {
        self.scores.player_wins += 1;
    }

    /// Counts a round won by the computer.
    pub fn record_computer_win(&mut self) {
        self.scores.computer_wins += 1;
    }

    /// Counts a drawn round.
    pub fn record_tie(&mut self) {
        self.scores.ties += 1;
    }

    /// Counts a round won by `side`.
    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::Player => self.record_player_win(),
            Side::Computer => self.record_computer_win(),
        }
    }

    /// Captures the grid, turn, scores and winning line for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        let winner = self.winner();
        BoardSnapshot {
            rows: self.rows(),
            turn: self.turn,
            scores: self.scores,
            winner,
            winning_line: winner.and_then(|side| self.winning_line(side)),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
