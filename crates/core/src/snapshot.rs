use crate::types::Tile;

/// Read-only copy of a session for renderers and observers.
///
/// `GameState::snapshot_into` reuses the `cells` allocation across frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major tiles (y * width + x)
    pub cells: Vec<Tile>,
    pub win_threshold: Tile,
    pub max_tile: Tile,
    pub steps: u32,
    pub won: bool,
    pub lost: bool,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    /// Tile at (x, y), or None when out of bounds
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }
}
