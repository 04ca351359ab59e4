//! Error taxonomy for session construction.
//!
//! Only construction can fail. Once a session exists every operation on it is
//! total and reports "nothing happened" through its return value.

use thiserror::Error;

use crate::types::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board dimensions must be at least 1x1, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("win threshold must be a power of two of at least 4, got {0}")]
    InvalidWinThreshold(Tile),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({x}, {y}) holds {value}, which is neither empty nor a power of two")]
    InvalidTile { x: usize, y: usize, value: Tile },
}
