//! Text rendering for the console front end.

use tictac_core::{Board, Cell, Line, Position, SIZE, Scoreboard, Side};

/// Window-title style score line.
pub fn score_title(scores: &Scoreboard) -> String {
    format!(
        "Tic Tac Toe - Player Score: {}  Computer Score: {}  Ties: {}",
        scores.player_wins(),
        scores.computer_wins(),
        scores.ties()
    )
}

/// Announcement for a finished round; `None` is a tie.
pub fn outcome_message(winner: Option<Side>) -> &'static str {
    match winner {
        Some(Side::Player) => "Player wins!",
        Some(Side::Computer) => "Computer wins!",
        None => "It's a tie!",
    }
}

/// Draws the board. Empty cells show their keypad number; cells on
/// `highlight` are wrapped in brackets.
pub fn render_board(board: &Board, highlight: Option<&Line>) -> String {
    let mut out = String::new();
    for row in 0..SIZE {
        let cells: Vec<String> = (0..SIZE)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| {
                let lit = highlight.is_some_and(|line| line.contains(&pos));
                match (board.cell(pos), lit) {
                    (Cell::Empty, _) => format!(" {} ", pos.to_index() + 1),
                    (Cell::Marked(side), true) => format!("[{}]", side.symbol()),
                    (Cell::Marked(side), false) => format!(" {} ", side.symbol()),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < SIZE - 1 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_title_format() {
        let mut board = Board::new();
        board.record_player_win();
        board.record_tie();
        board.record_tie();
        assert_eq!(
            score_title(&board.scores()),
            "Tic Tac Toe - Player Score: 1  Computer Score: 0  Ties: 2"
        );
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.place(pos, Side::Computer).unwrap();
        }
        board.place(Position::TopRight, Side::Player).unwrap();
        let line = board.winning_line(Side::Computer);

        let text = render_board(&board, line.as_ref());

        assert_eq!(
            text,
            "[O]| 2 | X \n---+---+---\n 4 |[O]| 6 \n---+---+---\n 7 | 8 |[O]\n"
        );
    }

    #[test]
    fn test_render_numbers_empty_cells() {
        let mut board = Board::new();
        board.place(Position::Center, Side::Player).unwrap();
        board.place(Position::TopLeft, Side::Computer).unwrap();

        assert_eq!(
            render_board(&board, None),
            " O | 2 | 3 \n---+---+---\n 4 | X | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(Some(Side::Player)), "Player wins!");
        assert_eq!(outcome_message(Some(Side::Computer)), "Computer wins!");
        assert_eq!(outcome_message(None), "It's a tie!");
    }
}
