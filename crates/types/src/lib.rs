//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The classic game is played on a 4x4 grid. Any `cols x rows` grid with both
//! dimensions at least 1 is accepted by the core.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLS` | 4 | Default board width |
//! | `DEFAULT_ROWS` | 4 | Default board height |
//! | `WIN_THRESHOLD` | 2048 | Tile value that wins the game |
//! | `INITIAL_TILES` | 4 | Tiles spawned when a session starts |
//! | `SPAWN_PER_MOVE` | 1 | Tiles spawned after every move that changed the board |
//! | `MAX_TILE` | 2^31 | Largest tile; two of them never merge |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, WIN_THRESHOLD};
//!
//! // Down and Right read their lines from the far edge
//! assert!(Direction::Down.is_reversed());
//! assert!(!Direction::Left.is_vertical());
//!
//! let action = GameAction::Move(Direction::Left);
//! assert_eq!(action.as_str(), "moveLeft");
//!
//! assert_eq!(WIN_THRESHOLD, 2048);
//! ```

/// Default board width in cells
pub const DEFAULT_COLS: usize = 4;

/// Default board height in cells
pub const DEFAULT_ROWS: usize = 4;

/// Tile value that sets the win flag
pub const WIN_THRESHOLD: Tile = 2048;

/// Number of tiles spawned when a session starts
pub const INITIAL_TILES: usize = 4;

/// Number of tiles spawned after a move that changed the board
pub const SPAWN_PER_MOVE: usize = 1;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - power of two: Tile with that value
pub type Tile = u32;

/// Largest tile a board can hold. Two of these never merge.
pub const MAX_TILE: Tile = 1 << 31;

/// Returns true if `value` may appear on a board (zero or a power of two up to `MAX_TILE`).
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || value.is_power_of_two()
}


/// The four slide directions
///
/// A slide pushes every tile toward the named edge of the board:
/// - **Up**: toward row 0
/// - **Down**: toward the last row
/// - **Left**: toward column 0
/// - **Right**: toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the game-over check tries them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// True for Up/Down, whose lines are columns
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True for Down/Right, whose lines are read from the far end
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These are produced by the input layer and consumed by
/// `GameState::apply_action` in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward one edge
    Move(Direction),
    /// Discard the session and start a new one with the same dimensions
    Restart,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}
