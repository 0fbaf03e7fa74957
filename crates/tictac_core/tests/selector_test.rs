//! Tests for the computer's move heuristic.

use std::collections::HashMap;

use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::IteratorRandom as _};
use tictac_core::{Board, MoveError, MoveSelector, Position, Side, Tactic};

fn board_with(player: &[Position], computer: &[Position]) -> Board {
    let mut board = Board::new();
    for &pos in player {
        board.place(pos, Side::Player).unwrap();
    }
    for &pos in computer {
        board.place(pos, Side::Computer).unwrap();
    }
    board.set_turn(Side::Computer);
    board
}

#[test]
fn test_takes_immediate_win() {
    let board = board_with(
        &[Position::MiddleLeft, Position::BottomRight],
        &[Position::TopLeft, Position::TopCenter],
    );
    let decision = MoveSelector::seeded(11).select_move(&board).unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.tactic, Tactic::Win);
}

#[test]
fn test_blocks_opponent_win() {
    let board = board_with(
        &[Position::MiddleLeft, Position::Center],
        &[Position::TopLeft, Position::BottomCenter],
    );
    let decision = MoveSelector::seeded(11).select_move(&board).unwrap();
    assert_eq!(decision.position, Position::MiddleRight);
    assert_eq!(decision.tactic, Tactic::Block);
}

#[test]
fn test_block_picks_first_threat_in_scan_order() {
    // Player threatens both TopRight (row 0) and BottomLeft (column 0).
    let board = board_with(
        &[Position::TopLeft, Position::TopCenter, Position::MiddleLeft],
        &[Position::Center, Position::BottomRight],
    );
    let decision = MoveSelector::seeded(5).select_move(&board).unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.tactic, Tactic::Block);
}

#[test]
fn test_center_response_to_corner_opening() {
    let mut board = Board::new();
    board.place_mark(0, 0, Side::Player).unwrap();
    board.switch_turn();

    let decision = MoveSelector::seeded(0).select_move(&board).unwrap();
    assert_eq!(decision.position.coords(), (1, 1));
    assert_eq!(decision.tactic, Tactic::CenterResponse);
}

#[test]
fn test_opening_on_empty_board_is_a_corner() {
    let mut board = Board::new();
    board.set_turn(Side::Computer);
    let mut selector = MoveSelector::seeded(21);
    for _ in 0..20 {
        let decision = selector.select_move(&board).unwrap();
        assert!(decision.position.is_corner());
        assert_eq!(decision.tactic, Tactic::Corner);
    }
}

#[test]
fn test_corner_choice_is_reshuffled_every_call() {
    // Only the corners are open and nobody threatens a line.
    let board = board_with(
        &[Position::TopCenter, Position::MiddleLeft, Position::BottomCenter],
        &[Position::Center, Position::MiddleRight],
    );
    let mut selector = MoveSelector::seeded(2024);
    let mut counts: HashMap<Position, usize> = HashMap::new();

    for _ in 0..2000 {
        let decision = selector.select_move(&board).unwrap();
        assert_eq!(decision.tactic, Tactic::Corner);
        *counts.entry(decision.position).or_default() += 1;
    }

    for corner in Position::CORNERS {
        let seen = counts.get(&corner).copied().unwrap_or(0);
        assert!(seen > 300, "{corner} chosen only {seen} times");
    }
}

#[test]
fn test_full_board_has_no_legal_move() {
    let mut board = Board::new();
    let pattern = "XOXXOOOXX";
    for (pos, ch) in Position::ALL.into_iter().zip(pattern.chars()) {
        let side = if ch == 'X' { Side::Player } else { Side::Computer };
        board.place(pos, side).unwrap();
    }
    board.set_turn(Side::Computer);

    let err = MoveSelector::seeded(9).select_move(&board).unwrap_err();
    assert_eq!(err, MoveError::NoLegalMove);
}

#[test]
fn test_never_picks_occupied_cell_and_never_mutates() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut selector = MoveSelector::seeded(78);

    for _ in 0..200 {
        let mut board = Board::new();
        if rng.random_bool(0.5) {
            board.set_turn(Side::Computer);
        }
        while !board.is_over() {
            let pos = match board.turn() {
                Side::Player => board.empty_positions().choose(&mut rng).unwrap(),
                Side::Computer => {
                    let before = board.clone();
                    let decision = selector.select_move(&board).unwrap();
                    assert_eq!(board, before);
                    decision.position
                }
            };
            assert!(board.cell(pos).is_empty());
            board.place(pos, board.turn()).unwrap();
            board.switch_turn();
        }
    }
}

#[test]
fn test_opposite_corner_fork_beats_the_heuristic() {
    // The heuristic is one-ply: it answers opposite corners with a corner
    // instead of an edge, and the player forks.
    let mut board = Board::new();
    let mut selector = MoveSelector::seeded(42);

    let play_computer = |board: &mut Board, selector: &mut MoveSelector| {
        let decision = selector.select_move(board).unwrap();
        board.place(decision.position, Side::Computer).unwrap();
        board.switch_turn();
        decision
    };
    let play_player = |board: &mut Board, pos: Position| {
        board.place(pos, Side::Player).unwrap();
        board.switch_turn();
    };

    play_player(&mut board, Position::TopLeft);
    let reply = play_computer(&mut board, &mut selector);
    assert_eq!(reply.position, Position::Center);

    play_player(&mut board, Position::BottomRight);
    let reply = play_computer(&mut board, &mut selector);
    assert_eq!(reply.tactic, Tactic::Corner);

    // Block the computer's diagonal by taking the opposite corner: fork.
    let remaining_corner = [Position::TopRight, Position::BottomLeft]
        .into_iter()
        .find(|&pos| board.cell(pos).is_empty())
        .unwrap();
    play_player(&mut board, remaining_corner);
    let reply = play_computer(&mut board, &mut selector);
    assert_eq!(reply.tactic, Tactic::Block);
    assert!(!board.is_winner(Side::Computer));

    let winning = board
        .empty_positions()
        .find(|&pos| board.wins_with(pos, Side::Player))
        .expect("fork leaves a second threat");
    play_player(&mut board, winning);
    assert!(board.is_winner(Side::Player));
}
