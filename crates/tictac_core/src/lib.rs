//! Pure tic-tac-toe game logic.
//!
//! - [`Board`]: the 3×3 grid, whose turn it is, and session scores.
//! - [`MoveSelector`]: the computer's heuristic opponent.
//!
//! Neither type knows anything about rendering or input. A front end drives
//! them: it places the human's marks, asks the selector for the computer's
//! reply, and checks [`Board::is_winner`] / [`Board::is_full`] after each
//! move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
mod rules;
mod selector;
mod types;

pub use board::{Board, BoardSnapshot, Scoreboard};
pub use error::{InvalidReason, MoveError};
pub use position::{Position, SIZE};
pub use rules::{LINES, Line};
pub use selector::{Decision, MoveSelector, Tactic};
pub use types::{Cell, Side};
