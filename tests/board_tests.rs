//! Board engine behavior through the public API.

use lights_out::{
    has_won, initialize, initialize_seeded, toggle_around,
    Board, BoardConfig, GameRng, GameStatus, LightsOut, LightsOutError,
};

fn lit(board: &Board) -> Vec<(usize, usize)> {
    board.lit_positions().map(|p| (p.row, p.col)).collect()
}

// =============================================================================
// Initialization
// =============================================================================

/// Boards of every shape come out with the requested rows and columns.
#[test]
fn test_initialize_dimensions() {
    let mut rng = GameRng::new(42);
    for (rows, cols) in [(1, 1), (1, 9), (3, 3), (5, 2), (10, 10)] {
        let board = initialize(&BoardConfig::new(rows, cols, 0.5), &mut rng).unwrap();
        assert_eq!(board.rows(), rows);
        assert_eq!(board.cols(), cols);
        assert_eq!(board.iter_rows().flatten().count(), rows * cols);
    }
}

/// A zero light probability produces an all-off board that is already won.
#[test]
fn test_initialize_zero_probability_is_won() {
    let mut rng = GameRng::new(42);
    let board = initialize(&BoardConfig::new(3, 3, 0.0), &mut rng).unwrap();
    assert_eq!(board.to_string(), "...\n...\n...");
    assert!(has_won(&board));
}

/// A light probability of one lights every cell.
#[test]
fn test_initialize_full_probability() {
    let mut rng = GameRng::new(42);
    let board = initialize(&BoardConfig::new(6, 4, 1.0), &mut rng).unwrap();
    assert_eq!(board.lit_count(), 24);
    assert!(!has_won(&board));
}

/// Zero dimensions are rejected before any board is built.
#[test]
fn test_initialize_rejects_bad_config() {
    let mut rng = GameRng::new(42);
    let err = initialize(&BoardConfig::new(0, 0, 0.5), &mut rng).unwrap_err();
    assert!(matches!(err, LightsOutError::InvalidConfig(_)));
}

/// Identical seeds produce identical boards.
#[test]
fn test_same_seed_same_board() {
    let config = BoardConfig::new(8, 8, 0.4);
    let a = initialize(&config, &mut GameRng::new(7)).unwrap();
    let b = initialize(&config, &mut GameRng::new(7)).unwrap();
    assert_eq!(a, b);
}

/// Different seeds produce different boards.
#[test]
fn test_different_seeds_differ() {
    let config = BoardConfig::new(8, 8, 0.5);
    let a = initialize(&config, &mut GameRng::new(1)).unwrap();
    let b = initialize(&config, &mut GameRng::new(2)).unwrap();
    assert_ne!(a, b);
}

/// A saved RNG state regenerates the same next board.
#[test]
fn test_restored_rng_reproduces_board() {
    let config = BoardConfig::new(5, 5, 0.5);
    let mut rng = GameRng::new(99);
    let _ = initialize(&config, &mut rng).unwrap();

    let saved = rng.state();
    let expected = initialize(&config, &mut rng).unwrap();
    let actual = initialize(&config, &mut GameRng::from_state(&saved)).unwrap();
    assert_eq!(expected, actual);
}

/// The lit fraction of a large board tracks the light probability.
#[test]
fn test_light_probability_roughly_respected() {
    let mut rng = GameRng::new(123);
    let board = initialize(&BoardConfig::new(100, 100, 0.25), &mut rng).unwrap();
    let ratio = board.lit_count() as f64 / 10_000.0;
    assert!((0.2..0.3).contains(&ratio), "lit ratio {ratio}");
}

// =============================================================================
// Toggling
// =============================================================================

/// Pressing the top-left corner flips only the corner and its two neighbors.
#[test]
fn test_corner_flips_three() {
    let board = toggle_around(Board::new(3, 3).unwrap(), 0, 0);
    assert_eq!(lit(&board), vec![(0, 0), (0, 1), (1, 0)]);
}

/// Pressing the bottom-right corner flips only the corner and its two neighbors.
#[test]
fn test_opposite_corner_flips_three() {
    let board = toggle_around(Board::new(3, 3).unwrap(), 2, 2);
    assert_eq!(lit(&board), vec![(1, 2), (2, 1), (2, 2)]);
}

/// On an all-lit board a corner press turns off exactly three cells.
#[test]
fn test_full_board_corner_press() {
    let mut rng = GameRng::new(0);
    let board = initialize(&BoardConfig::new(3, 3, 1.0), &mut rng).unwrap();
    let board = toggle_around(board, 0, 0);

    assert!(!board.is_lit(0, 0));
    assert!(!board.is_lit(0, 1));
    assert!(!board.is_lit(1, 0));
    assert_eq!(board.lit_count(), 6);
    assert!(!has_won(&board));
}

/// A center press on a won board lights five cells and ends the win.
#[test]
fn test_center_press_on_empty_board_not_won() {
    let board = Board::new(3, 3).unwrap();
    assert!(has_won(&board));

    let board = toggle_around(board, 1, 1);
    assert_eq!(board.lit_count(), 5);
    assert!(!has_won(&board));
}

/// Pressing the same cell twice restores the board.
#[test]
fn test_double_toggle_restores() {
    let original: Board = "O.O.\n.OO.\nO..O".parse().unwrap();
    let board = toggle_around(toggle_around(original.clone(), 1, 2), 1, 2);
    assert_eq!(board, original);
}

/// Vertical neighbors are clipped on a single-row board.
#[test]
fn test_single_row_board() {
    let board = toggle_around(Board::new(1, 5).unwrap(), 0, 2);
    assert_eq!(board.to_string(), ".OOO.");
}

// =============================================================================
// Sessions
// =============================================================================

/// Pressing the four corners solves the four-corner puzzle on the last press.
#[test]
fn test_solve_corner_puzzle() {
    let board: Board = "O.O\n...\nO.O".parse().unwrap();
    let mut game = LightsOut::from_board(board, 0);

    for (row, col) in [(0, 0), (0, 2), (2, 0)] {
        game.toggle_around(row, col).unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
    }

    let solved = game.toggle_around(2, 2).unwrap();
    assert!(has_won(solved));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.moves(), 4);
}

/// A session refuses further moves once the board is cleared.
#[test]
fn test_session_stops_after_win() {
    let board: Board = "OO\nO.".parse().unwrap();
    let mut game = LightsOut::from_board(board, 0);

    let after = game.toggle_around(0, 0).unwrap();
    assert!(has_won(after));
    assert_eq!(game.status(), GameStatus::Won);

    assert_eq!(game.toggle_around(1, 1), Err(LightsOutError::GameAlreadyWon));
    assert_eq!(game.moves(), 1);
    assert!(game.board().is_all_off());
}

/// A seeded session deals the same board as `initialize` with that seed.
#[test]
fn test_seeded_session_matches_free_functions() {
    let config = BoardConfig::new(4, 5, 0.5).with_seed(31);
    let game = LightsOut::new(config.clone()).unwrap();
    let board = initialize(&config, &mut GameRng::new(31)).unwrap();
    assert_eq!(game.board(), &board);
}

/// `initialize_seeded` honors the config seed.
#[test]
fn test_initialize_seeded_reproducible() {
    let config = BoardConfig::new(5, 4, 0.5).with_seed(11);
    let board = initialize_seeded(&config).unwrap();
    assert_eq!(board, initialize(&config, &mut GameRng::new(11)).unwrap());
    assert_eq!(board, initialize_seeded(&config).unwrap());
}

/// Oversized boards come back as `InvalidConfig` instead of aborting.
#[test]
fn test_oversized_board_rejected() {
    let config = BoardConfig::new(usize::MAX, 1, 0.5);
    assert!(matches!(config.validate(), Err(LightsOutError::InvalidConfig(_))));
    assert!(matches!(
        initialize(&config, &mut GameRng::new(1)),
        Err(LightsOutError::InvalidConfig(_))
    ));
    assert!(Board::new(usize::MAX, 1).is_err());
}
