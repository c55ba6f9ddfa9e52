//! Tests for the game controller and its move history.

use tictactoe_history::{
    Board, GameController, HistoryError, MoveEntry, Player, Position, Square, Status, rules,
};

fn play_all(game: &mut GameController, positions: &[Position]) {
    for pos in positions {
        assert!(game.click(*pos), "{pos} should be playable");
    }
}

#[test]
fn test_history_grows_by_one_per_play() {
    let mut game = GameController::new();
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ];
    for (k, pos) in moves.into_iter().enumerate() {
        assert!(game.click(pos));
        assert_eq!(game.history().len(), k + 2);
        assert_eq!(game.current_move(), game.history().len() - 1);
    }
}

#[test]
fn test_turn_alternates_with_move_count() {
    let mut game = GameController::new();
    for (k, pos) in Position::ALL.into_iter().take(6).enumerate() {
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.next_player(), expected);
        assert_eq!(game.x_is_next(), k % 2 == 0);
        game.click(pos);
    }
}

#[test]
fn test_play_after_jump_truncates_future() {
    let mut game = GameController::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
        ],
    );
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.current_move(), 4);

    game.jump_to(2).expect("move 2 exists");
    assert_eq!(game.history().len(), 5);

    play_all(&mut game, &[Position::BottomLeft]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 3);
    // O's reply in the bottom-right corner belonged to the abandoned branch.
    assert_eq!(
        game.current_board().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(
        game.current_board().get(Position::BottomRight),
        Square::Empty
    );
}

#[test]
fn test_diagonal_win_scenario() {
    let mut game = GameController::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::MiddleRight,
            Position::BottomRight,
        ],
    );

    let win = rules::evaluate(game.current_board()).expect("X completed the diagonal");
    assert_eq!(win.player(), Player::X);
    assert_eq!(
        win.line(),
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert_eq!(game.board_view().status(), Status::Winner(Player::X));
    assert!(game.board_view().is_highlighted(Position::Center));
}

#[test]
fn test_center_taken_by_o_blocks_diagonal() {
    // X: 0, 1, 8 and O: 4, 5 completes no line.
    let mut game = GameController::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::BottomRight,
        ],
    );
    assert_eq!(rules::evaluate(game.current_board()), None);
    assert_eq!(game.board_view().status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_click_on_occupied_cell_is_ignored() {
    let mut game = GameController::new();
    play_all(&mut game, &[Position::TopLeft]);
    let board: Board = *game.current_board();

    assert!(!game.click(Position::TopLeft));
    assert_eq!(game.current_board(), &board);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_click_after_win_is_ignored_but_navigation_works() {
    let mut game = GameController::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ],
    );
    assert!(!game.click(Position::BottomLeft));
    assert_eq!(game.history().len(), 6);

    game.jump_to(4).expect("move 4 exists");
    assert!(game.click(Position::BottomLeft));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = GameController::new();
    // X O X / X O O / O X X
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(game.current_move(), 9);
    assert!(rules::is_full(game.current_board()));
    assert_eq!(game.board_view().status().to_string(), "Draw: No one wins");
}

#[test]
fn test_toggle_sort_twice_restores_order() {
    let mut game = GameController::new();
    play_all(&mut game, &[Position::Center, Position::TopLeft]);
    let history = game.history().to_vec();
    let original: Vec<MoveEntry> = game.moves();

    game.toggle_sort();
    let reversed = game.moves();
    assert_eq!(
        reversed.iter().map(|e| e.move_number).collect::<Vec<_>>(),
        vec![2, 1, 0]
    );

    game.toggle_sort();
    assert_eq!(game.moves(), original);
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.current_move(), 2);
}

#[test]
fn test_move_labels_follow_pointer() {
    let mut game = GameController::new();
    play_all(&mut game, &[Position::Center, Position::BottomLeft]);
    game.jump_to(1).expect("move 1 exists");

    let labels: Vec<String> = game.moves().iter().map(MoveEntry::label).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start".to_string(),
            "You are at move #1".to_string(),
            "Go to move (3, 1)".to_string(),
        ]
    );
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let mut game = GameController::new();
    let err = game.jump_to(1).unwrap_err();
    assert_eq!(err, HistoryError::OutOfRange { requested: 1, len: 1 });
    assert_eq!(game.current_move(), 0);
}

#[test]
fn test_mark_counts_stay_balanced_across_jumps() {
    fn assert_balanced(game: &GameController) {
        let x = game.current_board().count(Player::X);
        let o = game.current_board().count(Player::O);
        assert!(
            x == o || x == o + 1,
            "move {}: X has {x} marks, O has {o}",
            game.current_move()
        );
        assert_eq!(x + o, game.current_move());
    }

    let mut game = GameController::new();
    assert_balanced(&game);
    for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
        assert!(game.click(pos));
        assert_balanced(&game);
    }

    // Rewind to O's turn and branch.
    game.jump_to(1).expect("move 1 exists");
    assert_balanced(&game);
    for pos in [Position::BottomLeft, Position::TopRight, Position::BottomRight] {
        assert!(game.click(pos));
        assert_balanced(&game);
    }

    // Rewind to X's turn and branch again.
    game.jump_to(2).expect("move 2 exists");
    assert_balanced(&game);
    for pos in [Position::TopCenter, Position::BottomCenter, Position::MiddleLeft] {
        assert!(game.click(pos));
        assert_balanced(&game);
    }

    for n in 0..game.history().len() {
        game.jump_to(n).expect("move exists");
        assert_balanced(&game);
    }
}
