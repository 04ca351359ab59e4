//! Session tests - moves, spawns, status flags and restarts

use tui_2048::core::{Board, GameConfig, GameError, GameState};
use tui_2048::types::{is_valid_tile, Direction, GameAction, Tile, INITIAL_TILES};

fn session(rows: Vec<Vec<Tile>>) -> GameState {
    GameState::with_board(Board::from_rows(rows).unwrap(), GameConfig::seeded(2024)).unwrap()
}

#[test]
fn test_merge_scenarios() {
    use tui_2048::core::merge;

    assert_eq!(merge(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], true));
    assert_eq!(merge(&[2, 0, 0, 2]), (vec![4, 0, 0, 0], true));
    assert_eq!(merge(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], false));
    assert_eq!(merge(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], false));
}

#[test]
fn test_two_by_two_left_merge_spawns_once() {
    let mut game = session(vec![vec![2, 2], vec![2, 2]]);

    assert!(game.apply_move(Direction::Left));
    assert_eq!(game.board().get(0, 0), Some(4));
    assert_eq!(game.board().get(0, 1), Some(4));
    // Exactly one of the two emptied cells was filled
    assert_eq!(game.board().tile_count(), 3);
    assert_eq!(game.steps(), 1);
}

#[test]
fn test_locked_two_by_two_is_lost() {
    let mut game = session(vec![vec![2, 4], vec![4, 2]]);

    for dir in Direction::ALL {
        assert!(!game.apply_move(dir), "{dir:?} should not move");
    }
    game.check_game_over();
    assert!(game.is_lost());
    assert!(!game.is_won());
    assert_eq!(game.steps(), 0);
}

#[test]
fn test_largest_tiles_are_final() {
    let max = tui_2048::types::MAX_TILE;
    let mut game = session(vec![vec![max, max], vec![2, 4]]);

    assert!(!game.apply_move(Direction::Left));
    assert_eq!(game.board().to_rows(), vec![vec![max, max], vec![2, 4]]);
    assert_eq!(game.steps(), 0);
    assert!(game.is_lost());
    assert!(game.is_won());
}

#[test]
fn test_full_board_with_vertical_pair_is_not_lost() {
    let mut game = session(vec![vec![2, 4, 8], vec![16, 32, 8], vec![2, 4, 16]]);
    assert!(!game.check_game_over());
    assert!(!game.is_lost());
}

#[test]
fn test_full_checkerboard_is_lost() {
    let mut game = session(vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ]);
    assert!(game.check_game_over());
    assert!(!game.apply_action(GameAction::Move(Direction::Up)));
}

#[test]
fn test_new_session_seeds_initial_tiles() {
    let game = GameState::new(GameConfig::seeded(1)).unwrap();
    assert_eq!(game.board().tile_count(), INITIAL_TILES);
    assert!(game
        .board()
        .cells()
        .iter()
        .all(|&v| v == 0 || v == 2 || v == 4));
    assert!(!game.is_won());
    assert!(!game.is_lost());
}

#[test]
fn test_invalid_sessions_fail_fast() {
    assert_eq!(
        GameState::new(GameConfig::seeded(1).with_size(0, 0)).unwrap_err(),
        GameError::InvalidDimensions { cols: 0, rows: 0 }
    );
    assert_eq!(
        GameState::new(GameConfig::seeded(1).with_win_threshold(1000)).unwrap_err(),
        GameError::InvalidWinThreshold(1000)
    );
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut game = GameState::new(GameConfig::seeded(31337)).unwrap();
    let order = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
    let mut won_seen = false;

    for i in 0..2000 {
        let dir = order[i % order.len()];
        let before_sum = game.board().sum();
        let before_count = game.board().tile_count();
        let before_steps = game.steps();
        let expected = game.board().clone().slide(dir);

        let changed = game.apply_move(dir);
        assert_eq!(changed, expected.changed);

        let board = game.board();
        assert!(board.cells().iter().all(|&v| is_valid_tile(v)));
        if changed {
            assert_eq!(game.steps(), before_steps + 1);
            let spawned = board.sum() - before_sum;
            assert!(spawned == 2 || spawned == 4, "spawned {spawned}");
            assert_eq!(
                board.tile_count(),
                before_count - expected.merges as usize + 1
            );
        } else {
            assert_eq!(game.steps(), before_steps);
            assert_eq!(board.sum(), before_sum);
        }

        if won_seen {
            assert!(game.is_won());
        }
        won_seen |= game.is_won();

        if game.is_lost() {
            assert!(board.is_full());
            assert!(!board.can_move());
            break;
        }
    }
}

#[test]
fn test_low_threshold_win_then_play_continues() {
    let config = GameConfig::seeded(8).with_win_threshold(16);
    let board = Board::from_rows(vec![vec![8, 8, 0, 0], vec![0, 0, 0, 0]]).unwrap();
    let mut game = GameState::with_board(board, config).unwrap();

    assert!(game.apply_move(Direction::Left));
    assert!(game.is_won());
    assert!(!game.is_lost());
    // Won sessions keep accepting moves
    assert!(game.apply_move(Direction::Right));
    assert!(game.is_won());
}

#[test]
fn test_restart_keeps_dimensions() {
    let config = GameConfig::seeded(5).with_size(3, 5);
    let mut game = GameState::new(config).unwrap();
    game.apply_move(Direction::Left);
    game.apply_move(Direction::Up);

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.board().width(), 3);
    assert_eq!(game.board().height(), 5);
    assert_eq!(game.board().tile_count(), INITIAL_TILES);
    assert_eq!(game.steps(), 0);
    assert_eq!(game.episode_id(), 1);
}

#[test]
fn test_sessions_are_independent() {
    let mut a = session(vec![vec![2, 2], vec![0, 0]]);
    let b = session(vec![vec![2, 2], vec![0, 0]]);

    assert!(a.apply_move(Direction::Left));
    assert_eq!(b.board().to_rows(), vec![vec![2, 2], vec![0, 0]]);
    assert_eq!(b.steps(), 0);
}
