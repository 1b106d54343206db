//! Tests for win detection and move validation.

use rewind_tictactoe::{
    Board, LINES, MoveError, Player, Position, Square, attempt_move, check_winner,
};

fn board_from(x: &[usize], o: &[usize]) -> Board {
    let board = x.iter().fold(Board::new(), |b, &i| {
        b.with_mark(Position::from_index(i).unwrap(), Player::X)
    });
    o.iter().fold(board, |b, &i| {
        b.with_mark(Position::from_index(i).unwrap(), Player::O)
    })
}

#[test]
fn test_lines_are_listed_in_checking_order() {
    let indices: Vec<[usize; 3]> = LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_each_triple_wins_with_noise() {
    // Each triple for X, with O stones elsewhere that complete nothing.
    let cases: [([usize; 3], &[usize]); 8] = [
        ([0, 1, 2], &[3, 4]),
        ([3, 4, 5], &[0, 8]),
        ([6, 7, 8], &[0, 4]),
        ([0, 3, 6], &[1, 2]),
        ([1, 4, 7], &[0, 8]),
        ([2, 5, 8], &[0, 4]),
        ([0, 4, 8], &[1, 2]),
        ([2, 4, 6], &[0, 1]),
    ];
    for (triple, noise) in cases {
        let board = board_from(&triple, noise);
        assert_eq!(check_winner(&board), Some(Player::X), "triple {triple:?}");
    }
}

#[test]
fn test_no_winner_on_drawn_board() {
    // X O X / X O O / O X X
    let board = board_from(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_multi_winner_board_reports_first_line() {
    // X holds the top row, O the bottom row: rows are checked top first.
    let board = board_from(&[0, 1, 2], &[6, 7, 8]);
    assert_eq!(check_winner(&board), Some(Player::X));

    // O holds the middle row, X the bottom row: the middle row comes first.
    let board = board_from(&[6, 7, 8], &[3, 4, 5]);
    assert_eq!(check_winner(&board), Some(Player::O));
}

#[test]
fn test_attempt_move_on_occupied_square_is_rejected() {
    let board = board_from(&[4], &[0]);
    let copy = board;
    assert_eq!(
        attempt_move(&board, Position::TopLeft, Player::X),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(board, copy);
}

#[test]
fn test_attempt_move_on_decided_board_is_rejected() {
    let board = board_from(&[2, 4, 6], &[0, 1]);
    for pos in Position::ALL {
        assert!(attempt_move(&board, pos, Player::O).is_err(), "{pos}");
    }
}

#[test]
fn test_attempt_move_changes_exactly_one_square() {
    let board = board_from(&[4], &[0]);
    for pos in Position::ALL.into_iter().filter(|&p| board.is_empty(p)) {
        let next = attempt_move(&board, pos, Player::X).unwrap();
        let diff: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&p| board.get(p) != next.get(p))
            .collect();
        assert_eq!(diff, vec![pos]);
        assert_eq!(next.get(pos), Square::Occupied(Player::X));
    }
}
