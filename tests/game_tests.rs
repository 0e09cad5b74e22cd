//! Line processor tests - token parsing, per-piece clearing, stack height

use stackline::{Game, GameError};

#[test]
fn test_single_q_lands_on_the_floor() {
    let mut game = Game::with_defaults();
    assert_eq!(game.process_input_line("Q0"), Ok(2));

    let grid = game.grid();
    for y in 98..100 {
        assert!(grid.is_occupied(0, y));
        assert!(grid.is_occupied(1, y));
        assert!(!grid.is_occupied(2, y));
    }
}

#[test]
fn test_non_overlapping_pieces_share_the_floor() {
    let mut game = Game::with_defaults();
    assert_eq!(game.process_input_line("Q0,I4"), Ok(2));
}

#[test]
fn test_full_row_is_cleared_mid_line() {
    // I0 + I4 fill columns 0-7 of the floor; Q8 completes the row while its
    // upper half stays behind after the clear.
    let mut game = Game::with_defaults();
    assert_eq!(game.process_input_line("I0,I4,Q8"), Ok(1));

    let grid = game.grid();
    assert!(grid.is_occupied(8, 99));
    assert!(grid.is_occupied(9, 99));
    assert!(!grid.is_occupied(0, 99));
}

#[test]
fn test_documented_multi_step_scenario() {
    let mut game = Game::with_defaults();
    assert_eq!(game.process_input_line("Q0,I2,I6,I0,I6,I6,Q2,Q4"), Ok(3));
}

#[test]
fn test_height_accumulates_across_lines() {
    let mut game = Game::with_defaults();
    assert_eq!(game.process_input_line("Q0"), Ok(2));
    assert_eq!(game.process_input_line("Q0"), Ok(4));
    assert_eq!(game.process_input_line("Q4"), Ok(4));
}

#[test]
fn test_t_leaves_gaps_under_its_arms() {
    let mut game = Game::with_defaults();
    assert_eq!(game.process_input_line("T1"), Ok(2));

    let grid = game.grid();
    // Top bar on row 98, stem on row 99.
    assert!(grid.is_occupied(1, 98));
    assert!(grid.is_occupied(2, 98));
    assert!(grid.is_occupied(3, 98));
    assert!(grid.is_occupied(2, 99));
    assert!(!grid.is_occupied(1, 99));
    assert!(!grid.is_occupied(3, 99));
}

#[test]
fn test_out_of_range_column_leaves_grid_unchanged() {
    let mut game = Game::with_defaults();
    assert_eq!(game.process_input_line("I7"), Ok(0));
    assert_eq!(game.process_input_line("Q9"), Ok(0));
}

#[test]
fn test_unknown_piece_aborts_the_line() {
    let mut game = Game::with_defaults();
    assert_eq!(
        game.process_input_line("Q0,X3"),
        Err(GameError::UnknownPiece('X'))
    );
    // No rollback: the earlier Q already landed.
    assert_eq!(game.stack_height(), 2);
}

#[test]
fn test_malformed_tokens_are_rejected() {
    let mut game = Game::with_defaults();
    assert_eq!(
        game.process_input_line("Q"),
        Err(GameError::MalformedToken("Q".to_string()))
    );
    assert_eq!(
        game.process_input_line("Qx"),
        Err(GameError::MalformedToken("Qx".to_string()))
    );
    assert_eq!(
        game.process_input_line("Q0,"),
        Err(GameError::MalformedToken(String::new()))
    );
    assert_eq!(
        game.process_input_line("Q-1"),
        Err(GameError::MalformedToken("Q-1".to_string()))
    );
}

#[test]
fn test_custom_grid_dimensions() {
    // A 4-wide grid: two Qs complete two rows at once.
    let mut game = Game::new(4, 10).unwrap();
    assert_eq!(game.process_input_line("Q0,Q2"), Ok(0));

    assert!(Game::new(0, 10).is_err());
    assert!(Game::new(64, 10).is_err());
}

#[test]
fn test_l_drops_past_the_q_beside_it() {
    let mut game = Game::with_defaults();
    // The L's spine at column 2 clears the Q and reaches the floor.
    assert_eq!(game.process_input_line("Q0,L2"), Ok(4));

    let grid = game.grid();
    for y in 96..100 {
        assert!(grid.is_occupied(2, y));
    }
    assert!(grid.is_occupied(3, 99));
    assert!(!grid.is_occupied(3, 98));
}
