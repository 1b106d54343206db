//! Tests for the move history, time travel and move-list ordering.

use rewind_tictactoe::{
    EntryKind, Game, HistoryError, Phase, Player, Position, SortOrder, Square, Status,
    check_winner, render_replay,
};

fn play_all(game: &mut Game, indices: &[usize]) {
    for &i in indices {
        game.play(Position::from_index(i).unwrap()).unwrap();
    }
}

#[test]
fn test_history_grows_one_square_per_move() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8, 2]);

    let history = game.history();
    assert_eq!(history.len(), 5);
    for k in 1..history.len() {
        assert_eq!(history[k].occupied(), history[k - 1].occupied() + 1);
        let diff = Position::ALL
            .into_iter()
            .filter(|&p| history[k].get(p) != history[k - 1].get(p))
            .count();
        assert_eq!(diff, 1, "board {k}");
    }
}

#[test]
fn test_jump_keeps_history() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8]);
    let history = game.history().to_vec();

    game.jump_to(1).unwrap();
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.current_board(), &history[1]);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_branching_overwrites_the_future() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8, 2]);
    let kept = game.history()[..2].to_vec();

    game.jump_to(1).unwrap();
    game.play(Position::BottomLeft).unwrap();

    assert_eq!(game.history().len(), 3);
    assert_eq!(&game.history()[..2], kept.as_slice());
    assert_eq!(game.current_move(), 2);
    assert_eq!(
        game.current_board().get(Position::BottomLeft),
        Square::Occupied(Player::O)
    );
    assert!(game.current_board().is_empty(Position::TopLeft));
}

#[test]
fn test_submit_move_from_start_discards_everything() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8]);
    game.jump_to(0).unwrap();

    let board = rewind_tictactoe::attempt_move(game.current_board(), Position::TopRight, Player::X)
        .unwrap();
    game.submit_move(board);

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_jump_out_of_range_is_an_error() {
    let mut game = Game::new();
    play_all(&mut game, &[4]);
    assert_eq!(
        game.jump_to(5),
        Err(HistoryError::OutOfRange {
            requested: 5,
            len: 2
        })
    );
}

#[test]
fn test_turn_alternation_ignores_sort_order() {
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let mut game = Game::with_sort_order(order);
        assert_eq!(game.next_player(), Player::X);
        play_all(&mut game, &[4]);
        assert_eq!(game.next_player(), Player::O);
        play_all(&mut game, &[0]);
        assert_eq!(game.next_player(), Player::X);
        game.toggle_sort();
        assert_eq!(game.next_player(), Player::X);
        game.jump_to(1).unwrap();
        assert_eq!(game.next_player(), Player::O);
    }
}

#[test]
fn test_move_labels_ascending() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8]);
    game.jump_to(1).unwrap();

    let moves = game.moves();
    let labels: Vec<&str> = moves.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "You are at move #1",
            "Go to move #2",
            "Go to move #3",
        ]
    );
    let kinds: Vec<EntryKind> = moves.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::Button,
            EntryKind::Text,
            EntryKind::Button,
            EntryKind::Button,
        ]
    );
}

#[test]
fn test_start_label_when_current() {
    let mut game = Game::new();
    play_all(&mut game, &[4]);
    game.jump_to(0).unwrap();
    assert_eq!(game.moves()[0].label, "You are at move #0");
    assert_eq!(game.moves()[1].label, "Go to move #1");
}

#[test]
fn test_descending_keeps_move_numbers() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0]);
    game.toggle_sort();
    assert_eq!(game.sort_order(), SortOrder::Descending);

    let moves = game.moves();
    let numbers: Vec<usize> = moves.iter().map(|e| e.number).collect();
    let ordinals: Vec<usize> = moves.iter().map(|e| e.ordinal()).collect();
    assert_eq!(numbers, vec![2, 1, 0]);
    assert_eq!(ordinals, vec![3, 2, 1]);
    assert_eq!(moves[0].label, "You are at move #2");
    assert_eq!(moves[2].label, "Go to game start");

    let history = game.history().to_vec();
    game.set_sort_order(SortOrder::Ascending);
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.current_move(), 2);
}

#[test]
fn test_end_to_end_diagonal_win() {
    let mut game = Game::new();

    // X center, O corner, X opposite corner.
    play_all(&mut game, &[4, 0, 8]);
    assert_eq!(check_winner(game.current_board()), None);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));

    // O threatens the top row, X blocks at 2, O takes 3, X completes 2-4-6.
    play_all(&mut game, &[1, 2, 3, 6]);
    assert_eq!(check_winner(game.current_board()), Some(Player::X));
    assert_eq!(game.phase(), Phase::Won(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");

    let decided = game.clone();
    for pos in [Position::MiddleRight, Position::BottomCenter] {
        assert!(game.play(pos).is_err());
    }
    assert_eq!(game, decided);
}

#[test]
fn test_full_board_without_winner_reports_no_draw() {
    // The board fills without a winner. No draw status exists: the status
    // line keeps naming the next player and every square rejects input.
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.current_board().occupied(), 9);
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.status().to_string(), "Next player: O");
    for pos in Position::ALL {
        assert!(game.play(pos).is_err());
    }
    assert_eq!(game.history().len(), 10);
}

#[test]
fn test_replay_matches_manual_play() {
    let positions = [Position::Center, Position::TopLeft, Position::BottomRight];
    let replayed = render_replay(&positions, false).unwrap();

    let mut manual = Game::new();
    play_all(&mut manual, &[4, 0, 8]);
    assert!(replayed.starts_with(&manual.current_board().to_string()));
    assert!(replayed.contains(&manual.status().to_string()));
    for entry in manual.moves() {
        assert!(replayed.contains(&format!("{:>2}. {}", entry.ordinal(), entry.label)));
    }

    assert!(render_replay(&[Position::Center, Position::Center], false).is_err());
}
