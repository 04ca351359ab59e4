//! Session configuration
//!
//! Dimensions, win threshold and seed for a session. Hosts usually build this
//! from the environment with [`GameConfig::from_env`].

use crate::error::GameError;
use crate::types::{Tile, DEFAULT_COLS, DEFAULT_ROWS, WIN_THRESHOLD};

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    pub win_threshold: Tile,
    /// Spawn RNG seed; `None` draws a random one per session
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            win_threshold: WIN_THRESHOLD,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Classic 4x4 game with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// - `TUI_2048_COLS` / `TUI_2048_ROWS`: board size (default 4x4)
    /// - `TUI_2048_WIN`: win threshold (default 2048)
    /// - `TUI_2048_SEED`: spawn seed (default random)
    ///
    /// Unparsable values fall back to the defaults. Call [`GameConfig::validate`]
    /// (or let `GameState::new` do it) before use.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse().ok());
        let defaults = Self::default();

        Self {
            cols: parse("TUI_2048_COLS").unwrap_or(defaults.cols),
            rows: parse("TUI_2048_ROWS").unwrap_or(defaults.rows),
            win_threshold: lookup("TUI_2048_WIN")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.win_threshold),
            seed: lookup("TUI_2048_SEED").and_then(|s| s.trim().parse().ok()),
        }
    }

    pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_win_threshold(mut self, win_threshold: Tile) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Reject configurations a session cannot be built from
    pub fn validate(&self) -> Result<(), GameError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(GameError::InvalidDimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.win_threshold < 4 || !self.win_threshold.is_power_of_two() {
            return Err(GameError::InvalidWinThreshold(self.win_threshold));
        }
        Ok(())
    }
}
