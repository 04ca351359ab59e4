//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of tiles. Uses a flat vector in row-major
//! order (`y * width + x`).
//! Coordinates: (x, y) where x is the column (0 = left) and y is the row (0 = top).
//!
//! Slides are done one line at a time: each row (Left/Right) or column (Up/Down)
//! is copied into a scratch buffer in traversal order, merged, and written back
//! through the same index mapping.

use crate::error::GameError;
use crate::merge::merge_in_place;
use crate::types::{is_valid_tile, Direction, Tile};

/// Result of sliding the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideOutcome {
    /// True if any line changed
    pub changed: bool,
    /// Total merges across all lines
    pub merges: u32,
}

/// The game board - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat vector of tiles, row-major order (y * width + x)
    cells: Vec<Tile>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions {
                cols: width,
                rows: height,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    /// Create from rows of tiles (row 0 is the top row)
    ///
    /// Every row must have the same length and every value must be zero or a
    /// power of two.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let mut board = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GameError::RaggedBoard {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::InvalidTile { x, y, value });
                }
                board.cells[y * width + x] = value;
            }
        }

        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Get width of the board (columns)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get height of the board (rows)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set tile at position (x, y)
    /// Returns false if out of bounds or if the value is not a valid tile
    pub fn set(&mut self, x: usize, y: usize, value: Tile) -> bool {
        if !is_valid_tile(value) {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate the board row by row
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width)
    }

    /// Convert to nested rows (row 0 first)
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Flat indices of all empty cells, in row-major order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Set the tile at a flat index (as returned by [`Board::empty_cells`])
    pub(crate) fn set_index(&mut self, idx: usize, value: Tile) {
        self.cells[idx] = value;
    }

    /// Check if the board has no empty cell
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if any tile is at least `value`
    pub fn has_tile_at_least(&self, value: Tile) -> bool {
        self.cells.iter().any(|&v| v >= value)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Number of lines a slide in `dir` processes
    fn line_count(&self, dir: Direction) -> usize {
        if dir.is_vertical() {
            self.width
        } else {
            self.height
        }
    }

    /// Number of cells in each line of a slide in `dir`
    fn line_len(&self, dir: Direction) -> usize {
        if dir.is_vertical() {
            self.height
        } else {
            self.width
        }
    }

    /// Flat index of position `pos` along line `line` when sliding in `dir`.
    ///
    /// Position 0 is the edge the tiles move toward. The same mapping is used to
    /// read the line out and to write the merged line back.
    #[inline(always)]
    fn line_index(&self, dir: Direction, line: usize, pos: usize) -> usize {
        let len = self.line_len(dir);
        let along = if dir.is_reversed() { len - 1 - pos } else { pos };
        if dir.is_vertical() {
            along * self.width + line
        } else {
            line * self.width + along
        }
    }

    /// Slide every tile toward the edge named by `dir`, merging equal neighbours.
    ///
    /// The board is mutated in place. `changed` is the OR of every line's flag.
    pub fn slide(&mut self, dir: Direction) -> SlideOutcome {
        let len = self.line_len(dir);
        let mut scratch = vec![0; len];
        let mut outcome = SlideOutcome::default();

        for line in 0..self.line_count(dir) {
            for (pos, slot) in scratch.iter_mut().enumerate() {
                *slot = self.cells[self.line_index(dir, line, pos)];
            }

            let merged = merge_in_place(&mut scratch);
            if !merged.changed {
                continue;
            }
            outcome.changed = true;
            outcome.merges += merged.merges;

            for (pos, &value) in scratch.iter().enumerate() {
                let idx = self.line_index(dir, line, pos);
                self.cells[idx] = value;
            }
        }

        outcome
    }

    /// Check whether sliding in `dir` would change the board.
    ///
    /// Runs the slide on a scratch copy; `self` is never modified.
    pub fn would_change(&self, dir: Direction) -> bool {
        self.clone().slide(dir).changed
    }

    /// Check whether any direction would change the board
    pub fn can_move(&self) -> bool {
        if !self.is_full() {
            return true;
        }
        Direction::ALL.iter().any(|&dir| self.would_change(dir))
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}
