//! RNG module - seeded randomness for tile spawning
//!
//! Spawning picks empty cells uniformly without replacement and gives each new
//! tile a value of 2 or 4 with equal probability. A seeded `StdRng` backs the
//! choices so the same seed replays the same game.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::Tile;

/// Deterministic spawn RNG
#[derive(Debug, Clone)]
pub struct SpawnRng {
    seed: u64,
    rng: StdRng,
}

impl SpawnRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG from a fresh random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a seed for a follow-up session (restart keeps replays deterministic)
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random::<u64>()
    }

    /// Choose up to `n` distinct entries of `candidates`, uniformly at random.
    ///
    /// The slice is reordered; the returned prefix holds the choice. If fewer
    /// than `n` candidates exist, all of them are returned.
    pub fn choose_cells<'a>(&mut self, candidates: &'a mut [usize], n: usize) -> &'a [usize] {
        let amount = n.min(candidates.len());
        let (chosen, _rest) = candidates.partial_shuffle(&mut self.rng, amount);
        chosen
    }

    /// Value of a freshly spawned tile: 2 or 4, each with probability 1/2
    pub fn tile_value(&mut self) -> Tile {
        if self.rng.random_bool(0.5) {
            2
        } else {
            4
        }
    }
}
