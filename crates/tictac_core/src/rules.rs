//! Win lines for tic-tac-toe.

use crate::position::Position;
use crate::types::{Cell, Side};

/// A line of three cells that wins when uniformly marked.
pub type Line = [Position; 3];

/// All 8 lines, in tie-break order: rows, then columns, then the main
/// diagonal, then the anti-diagonal.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully held by `side` on `cells`.
pub(crate) fn first_line_held(cells: &[Cell; 9], side: Side) -> Option<Line> {
    let mark = Cell::Marked(side);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| cells[pos.to_index()] == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_with(side: Side, positions: &[Position]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for pos in positions {
            cells[pos.to_index()] = Cell::Marked(side);
        }
        cells
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let cells = [Cell::Empty; 9];
        assert_eq!(first_line_held(&cells, Side::Player), None);
        assert_eq!(first_line_held(&cells, Side::Computer), None);
    }

    #[test]
    fn test_every_position_lies_on_a_line() {
        for pos in Position::ALL {
            assert!(LINES.iter().any(|line| line.contains(&pos)));
        }
    }

    #[test]
    fn test_row_wins_tie_break_over_column() {
        // Row 0 and column 0 both held: rows are scanned first.
        let cells = cells_with(
            Side::Player,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(first_line_held(&cells, Side::Player), Some(LINES[0]));
    }

    #[test]
    fn test_main_diagonal_before_anti_diagonal() {
        let cells = cells_with(
            Side::Computer,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );
        // Corners + center: no row or column is complete.
        assert_eq!(first_line_held(&cells, Side::Computer), Some(LINES[6]));
    }
}
