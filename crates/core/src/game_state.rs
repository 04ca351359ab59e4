//! Game state module - manages a complete session
//!
//! This module ties together the board, the spawn RNG and the session flags.
//! It handles moves, tile spawning, win/loss detection and restarts.
//!
//! # Session flags
//!
//! - `won` is set the first time any tile reaches the win threshold. Play continues.
//! - `lost` is set when the board is full and no direction would change it. After
//!   that, moves are ignored until [`GameState::restart`].
//!
//! Both flags are sticky for the session.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::rng::SpawnRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, Tile, INITIAL_TILES, SPAWN_PER_MOVE};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    config: GameConfig,
    rng: SpawnRng,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Moves that changed the board in this episode.
    steps: u32,
    won: bool,
    lost: bool,
}

impl GameState {
    /// Start a new session: zeroed board seeded with the initial tiles
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::new(config.cols, config.rows)?;
        let rng = match config.seed {
            Some(seed) => SpawnRng::new(seed),
            None => SpawnRng::from_entropy(),
        };

        let mut state = Self::from_parts(board, config, rng);
        state.spawn(INITIAL_TILES);
        debug!(
            cols = config.cols,
            rows = config.rows,
            win_threshold = config.win_threshold,
            seed = state.rng.seed(),
            "session started"
        );
        Ok(state)
    }

    /// Start a session from an existing board, without the initial spawn.
    ///
    /// The board's dimensions override `config.cols`/`config.rows`.
    pub fn with_board(board: Board, config: GameConfig) -> Result<Self, GameError> {
        let config = GameConfig {
            cols: board.width(),
            rows: board.height(),
            ..config
        };
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SpawnRng::new(seed),
            None => SpawnRng::from_entropy(),
        };

        let mut state = Self::from_parts(board, config, rng);
        state.check_won();
        Ok(state)
    }

    fn from_parts(board: Board, config: GameConfig, rng: SpawnRng) -> Self {
        Self {
            board,
            config,
            rng,
            episode_id: 0,
            steps: 0,
            won: false,
            lost: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Seed of the current episode's spawn RNG
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.win_threshold = self.config.win_threshold;
        out.max_tile = self.board.max_tile();
        out.steps = self.steps;
        out.won = self.won;
        out.lost = self.lost;
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Slide the board in `dir`.
    ///
    /// On change: spawns one tile, counts a step and runs the win check.
    /// Without change: runs the game-over check. Returns whether the board changed;
    /// always `false` once the session is lost.
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        if self.lost {
            return false;
        }

        let outcome = self.board.slide(dir);
        trace!(
            direction = dir.as_str(),
            changed = outcome.changed,
            merges = outcome.merges,
            "slide"
        );

        if !outcome.changed {
            self.check_game_over();
            return false;
        }

        self.spawn(SPAWN_PER_MOVE);
        self.steps += 1;
        self.check_won();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.apply_move(dir),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Place up to `n` new tiles (2 or 4) on distinct empty cells chosen uniformly.
    ///
    /// Fills every empty cell when fewer than `n` exist. Returns the number placed.
    pub fn spawn(&mut self, n: usize) -> usize {
        let mut empty = self.board.empty_cells();
        let chosen = self.rng.choose_cells(&mut empty, n);
        for &idx in chosen {
            let value = self.rng.tile_value();
            self.board.set_index(idx, value);
        }
        let placed = chosen.len();
        self.check_won();
        placed
    }

    /// Set the win flag if any tile reached the threshold
    fn check_won(&mut self) {
        if self.won || !self.board.has_tile_at_least(self.config.win_threshold) {
            return;
        }
        self.won = true;
        info!(
            steps = self.steps,
            max_tile = self.board.max_tile(),
            episode = self.episode_id,
            "win threshold reached"
        );
    }

    /// Game-over check: full board and no direction changes it.
    ///
    /// Trial moves run on a copy of the board; the live board is untouched.
    /// Returns the (sticky) lost flag.
    pub fn check_game_over(&mut self) -> bool {
        if self.lost {
            return true;
        }
        if !self.board.is_full() {
            return false;
        }
        if Direction::ALL
            .iter()
            .any(|&dir| self.board.would_change(dir))
        {
            return false;
        }

        self.lost = true;
        info!(
            steps = self.steps,
            max_tile = self.board.max_tile(),
            episode = self.episode_id,
            "no moves left"
        );
        true
    }

    /// Discard the session and start a new one with the same dimensions and threshold.
    ///
    /// The new episode's seed is drawn from the current RNG, so a seeded session
    /// replays identically across restarts.
    pub fn restart(&mut self) {
        let seed = self.rng.next_seed();
        self.rng = SpawnRng::new(seed);
        self.board.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.steps = 0;
        self.won = false;
        self.lost = false;
        self.spawn(INITIAL_TILES);
        debug!(episode = self.episode_id, seed, "session restarted");
    }
}
