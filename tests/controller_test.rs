//! Integration tests for the game controller state machine.

use tictactrail::{Cell, Game, JumpError, MoveError, Player};

#[test]
fn test_new_game_starts_at_empty_board() {
    let game = Game::new();

    assert_eq!(game.step(), 0);
    assert!(game.x_is_next());
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.winner(), None);
    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_turns_alternate_starting_with_x() {
    let mut game = Game::new();

    for index in [0, 3, 1, 4] {
        game.click(index).expect("cell is free");
    }

    assert_eq!(game.board().get(0), Some(Cell::Occupied(Player::X)));
    assert_eq!(game.board().get(1), Some(Cell::Occupied(Player::X)));
    assert_eq!(game.board().get(3), Some(Cell::Occupied(Player::O)));
    assert_eq!(game.board().get(4), Some(Cell::Occupied(Player::O)));
    assert_eq!(game.history().len(), 5);
    assert!(game.x_is_next());
}

#[test]
fn test_occupied_cell_rejected_without_state_change() {
    let mut game = Game::new();
    game.click(4).expect("cell is free");
    let before = game.clone();

    let result = game.click(4);

    assert_eq!(result, Err(MoveError::CellOccupied(4)));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_click_rejected() {
    let mut game = Game::new();
    let before = game.clone();

    assert_eq!(game.click(9), Err(MoveError::NoSuchCell(9)));
    assert_eq!(game, before);
}

#[test]
fn test_winning_line_ends_the_game() {
    let mut game = Game::new();

    // X: 0, 1, 2 wins the top row; O plays 4, 5.
    for index in [0, 4, 1, 5, 2] {
        game.click(index).expect("cell is free");
    }

    let winner = game.winner().expect("X completed the top row");
    assert_eq!(winner.player, Player::X);
    assert_eq!(winner.line, [0, 1, 2]);

    // Any further click at this step is a no-op.
    assert_eq!(game.click(8), Err(MoveError::GameOver));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_move_after_jump_truncates_history() {
    let mut game = Game::new();
    game.click(0).expect("cell is free");

    game.jump_to(0).expect("step 0 is recorded");
    game.click(4).expect("cell is free at game start");

    // The click(0) branch is discarded.
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.step(), 1);
    assert_eq!(game.board().get(4), Some(Cell::Occupied(Player::X)));
    assert_eq!(game.board().get(0), Some(Cell::Empty));
}

#[test]
fn test_jump_before_winning_move_reopens_play() {
    let mut game = Game::new();
    for index in [0, 4, 1, 5, 2] {
        game.click(index).expect("cell is free");
    }
    assert!(game.winner().is_some());

    // One step before the winning move there is no winner yet.
    game.jump_to(4).expect("step 4 is recorded");
    assert_eq!(game.winner(), None);
    assert!(game.x_is_next());

    // Moving from here discards the winning branch.
    game.click(8).expect("play reopened");
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.winner(), None);
    assert_eq!(game.board().get(2), Some(Cell::Empty));
    assert_eq!(game.board().get(8), Some(Cell::Occupied(Player::X)));
}

#[test]
fn test_jump_out_of_range_rejected() {
    let mut game = Game::new();
    game.click(0).expect("cell is free");

    assert_eq!(game.jump_to(5), Err(JumpError::NoSuchStep(5)));
    assert_eq!(game.step(), 1);
}

#[test]
fn test_jump_rederives_turn_from_parity() {
    let mut game = Game::new();
    for index in [0, 4, 1] {
        game.click(index).expect("cell is free");
    }
    assert!(!game.x_is_next());

    game.jump_to(2).expect("step 2 is recorded");
    assert!(game.x_is_next());

    game.jump_to(1).expect("step 1 is recorded");
    assert!(!game.x_is_next());
}

#[test]
fn test_no_overwrites_over_full_game() {
    let mut game = Game::new();

    // Fill the whole board without a winner:
    // X O X
    // X O O
    // O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.click(index).expect("cell is free");
    }

    assert_eq!(game.history().len(), 10);
    assert_eq!(game.winner(), None);
    assert!(game.board().cells().iter().all(|c| *c != Cell::Empty));

    // Every cell is taken, so every further click is rejected.
    for index in 0..9 {
        assert_eq!(game.click(index), Err(MoveError::CellOccupied(index)));
    }
}
