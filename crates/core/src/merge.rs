//! Line merger - slides and merges a single row or column
//!
//! A line is given in traversal order: index 0 is the edge the tiles move toward.
//! Non-zero tiles are compacted to the front, equal neighbours merge once each,
//! and the tail is padded with zeros. Tiles already at `MAX_TILE` stay put.
//!
//! The merge runs as a single two-pointer pass over the slice with one pending
//! candidate tile, so it needs no queue and no allocation.

use crate::types::{Tile, MAX_TILE};

/// Result of merging one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOutcome {
    /// True if any position differs from the input (merge or compaction)
    pub changed: bool,
    /// Number of pairs merged
    pub merges: u32,
}

/// Merge a line in place and report what happened.
///
/// A tile produced by a merge is written out immediately and never becomes the
/// pending candidate again, so `[2, 2, 2]` becomes `[4, 2, 0]` and `[2, 2, 2, 2]`
/// becomes `[4, 4, 0, 0]`.
pub fn merge_in_place(line: &mut [Tile]) -> LineOutcome {
    let mut out = LineOutcome::default();
    let mut write = 0usize;
    let mut pending: Option<Tile> = None;

    for read in 0..line.len() {
        let value = line[read];
        if value == 0 {
            continue;
        }

        match pending {
            Some(candidate) if candidate == value && candidate < MAX_TILE => {
                // write <= read here, so line[write] still holds its input value
                emit(line, &mut write, candidate + value, &mut out.changed);
                out.merges += 1;
                pending = None;
            }
            Some(candidate) => {
                emit(line, &mut write, candidate, &mut out.changed);
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }

    if let Some(candidate) = pending {
        emit(line, &mut write, candidate, &mut out.changed);
    }

    for cell in &mut line[write..] {
        if *cell != 0 {
            out.changed = true;
            *cell = 0;
        }
    }

    out
}

#[inline(always)]
fn emit(line: &mut [Tile], write: &mut usize, value: Tile, changed: &mut bool) {
    if line[*write] != value {
        *changed = true;
        line[*write] = value;
    }
    *write += 1;
}

/// Merge a line into a new vector.
///
/// Returns the merged line (same length as the input) and whether it differs
/// from the input.
pub fn merge(line: &[Tile]) -> (Vec<Tile>, bool) {
    let mut merged = line.to_vec();
    let outcome = merge_in_place(&mut merged);
    (merged, outcome.changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_pair_then_keep() {
        assert_eq!(merge(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], true));
    }

    #[test]
    fn test_merge_across_gap() {
        assert_eq!(merge(&[2, 0, 0, 2]), (vec![4, 0, 0, 0], true));
    }

    #[test]
    fn test_merge_largest_tiles_do_not_combine() {
        assert_eq!(merge(&[MAX_TILE, MAX_TILE]), (vec![MAX_TILE, MAX_TILE], false));
        assert_eq!(
            merge(&[0, MAX_TILE, 0, MAX_TILE]),
            (vec![MAX_TILE, MAX_TILE, 0, 0], true)
        );

        let half = MAX_TILE / 2;
        let mut line = [half, half, half, half];
        assert_eq!(merge_in_place(&mut line).merges, 2);
        assert_eq!(line, [MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(merge_in_place(&mut line), LineOutcome::default());
    }

    #[test]
    fn test_merge_empty_line() {
        assert_eq!(merge(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], false));
    }

    #[test]
    fn test_merge_no_pairs() {
        assert_eq!(merge(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], false));
    }

    #[test]
    fn test_merge_three_equal_merges_front_pair() {
        assert_eq!(merge(&[2, 2, 2]), (vec![4, 2, 0], true));
    }

    #[test]
    fn test_merge_four_equal() {
        assert_eq!(merge(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], true));
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        // 4 produced from 2+2 must not absorb the following 4
        assert_eq!(merge(&[2, 2, 4, 4]), (vec![4, 8, 0, 0], true));
        assert_eq!(merge(&[4, 2, 2, 0]), (vec![4, 4, 0, 0], true));
    }

    #[test]
    fn test_single_tile_at_front_unchanged() {
        assert_eq!(merge(&[8, 0, 0, 0]), (vec![8, 0, 0, 0], false));
    }

    #[test]
    fn test_single_tile_elsewhere_compacts() {
        assert_eq!(merge(&[0, 0, 8, 0]), (vec![8, 0, 0, 0], true));
    }

    #[test]
    fn test_mismatch_carries_candidate_forward() {
        assert_eq!(merge(&[2, 4, 4, 2]), (vec![2, 8, 2, 0], true));
        assert_eq!(merge(&[4, 0, 2, 2]), (vec![4, 4, 0, 0], true));
    }

    #[test]
    fn test_merge_in_place_counts_merges() {
        let mut line = [2, 2, 8, 8, 16];
        let outcome = merge_in_place(&mut line);
        assert_eq!(line, [4, 16, 16, 0, 0]);
        assert_eq!(
            outcome,
            LineOutcome {
                changed: true,
                merges: 2
            }
        );
    }

    #[test]
    fn test_zero_length_line() {
        let mut line: [Tile; 0] = [];
        assert_eq!(merge_in_place(&mut line), LineOutcome::default());
    }
}
