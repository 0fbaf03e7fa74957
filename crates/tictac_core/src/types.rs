//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One side of the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Side {
    /// The human player (marks with `X`).
    Player,
    /// The computer opponent (marks with `O`).
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Symbol drawn in cells this side has marked.
    pub fn symbol(self) -> char {
        match self {
            Side::Player => 'X',
            Side::Computer => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by a side's mark.
    Marked(Side),
}

impl Cell {
    /// Returns `true` if no mark occupies the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the side holding this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Marked(side) => Some(side),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(side) => write!(f, "{}", side.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Side::Player.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Player);
    }

    #[test]
    fn test_side_parses_case_insensitive() {
        assert_eq!(Side::from_str("computer").unwrap(), Side::Computer);
        assert_eq!(Side::from_str("Player").unwrap(), Side::Player);
        assert!(Side::from_str("nobody").is_err());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Empty.to_string(), " ");
        assert_eq!(Cell::Marked(Side::Player).to_string(), "X");
        assert_eq!(Cell::Marked(Side::Computer).to_string(), "O");
    }
}
