//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the sliding-tile merge puzzle: the line
//! merger, the board engine built on it, tile spawning and win/loss detection.
//! It has **no dependencies** on terminals, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Can run in any host (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`merge`]: slide-and-merge of a single line
//! - [`board`]: the grid, directional slides, and trial moves on a scratch copy
//! - [`game_state`]: a session with spawning, step counter, win/loss flags, restart
//! - [`rng`]: seeded uniform selection of spawn cells and tile values
//! - [`config`]: session dimensions, win threshold, seed
//! - [`snapshot`]: read-only copy of a session for renderers
//!
//! # Game Rules
//!
//! - **Slide**: every tile moves as far as possible toward the chosen edge
//! - **Merge**: two equal tiles meeting merge into their sum; a merged tile does
//!   not merge again in the same move, and pairs closest to the edge merge first
//! - **Spawn**: each move that changes the board adds a 2 or a 4 on a random empty cell
//! - **Win**: a tile reaches the win threshold (2048 by default); play may continue
//! - **Loss**: the board is full and no direction changes it
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameConfig, GameState};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_rows(vec![vec![2, 2], vec![2, 2]]).unwrap();
//! let mut game = GameState::with_board(board, GameConfig::seeded(12345)).unwrap();
//!
//! assert!(game.apply_move(Direction::Left));
//! assert_eq!(game.board().get(0, 0), Some(4));
//! assert_eq!(game.steps(), 1);
//! assert!(!game.is_won());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod merge;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SlideOutcome};
pub use config::GameConfig;
pub use error::GameError;
pub use game_state::GameState;
pub use merge::{merge, merge_in_place, LineOutcome};
pub use rng::SpawnRng;
pub use snapshot::GameSnapshot;
