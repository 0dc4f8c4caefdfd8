//! Admissible distance estimate: Manhattan distance plus linear conflicts.

use crate::grid::Grid;
use crate::state::{get_nibble, TileState};

pub fn heuristic(grid: &Grid, state: TileState) -> u32 {
    manhattan_distance(grid, state) + linear_conflict(grid, state)
}

pub fn manhattan_distance(grid: &Grid, state: TileState) -> u32 {
    let blank = grid.blank();
    let mut distance = 0;
    for i in 0..grid.total() {
        let tile = get_nibble(state, i);
        if tile == blank {
            continue;
        }
        let (goal_x, goal_y) = grid.cell(tile as usize);
        let (x, y) = grid.cell(i);
        distance += goal_x.abs_diff(x) + goal_y.abs_diff(y);
    }
    distance as u32
}

/// Extra moves forced by tiles that sit in their goal row (or column) but in
/// the wrong relative order.
///
/// Every tile that has to step out of a line and come back costs two moves.
/// The number of such tiles per line is the line length minus its longest
/// increasing run, which is the same as the reversed-pair count whenever at
/// most one pair is out of order.
pub fn linear_conflict(grid: &Grid, state: TileState) -> u32 {
    let side = grid.side();
    let blank = grid.blank();
    let mut line = [0u8; 4];
    let mut conflicts = 0;

    for row in 0..side {
        let mut len = 0;
        for col in 0..side {
            let tile = get_nibble(state, grid.index(col, row));
            if tile != blank && tile as usize / side == row {
                line[len] = tile;
                len += 1;
            }
        }
        conflicts += len - longest_increasing(&line[..len]);
    }

    for col in 0..side {
        let mut len = 0;
        for row in 0..side {
            let tile = get_nibble(state, grid.index(col, row));
            if tile != blank && tile as usize % side == col {
                line[len] = tile;
                len += 1;
            }
        }
        conflicts += len - longest_increasing(&line[..len]);
    }

    2 * conflicts as u32
}

fn longest_increasing(tiles: &[u8]) -> usize {
    let mut best = [1usize; 4];
    for j in 0..tiles.len() {
        for i in 0..j {
            if tiles[i] < tiles[j] {
                best[j] = best[j].max(best[i] + 1);
            }
        }
    }
    best[..tiles.len()].iter().copied().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::pack;

    fn h(side: usize, labels: &[u8]) -> u32 {
        let grid = Grid::new(side).unwrap();
        heuristic(&grid, pack(labels).unwrap())
    }

    #[test]
    fn goal_scores_zero() {
        for side in 1..=4 {
            let grid = Grid::new(side).unwrap();
            assert_eq!(heuristic(&grid, grid.goal()), 0);
        }
    }

    #[test]
    fn single_displaced_tile_is_pure_manhattan() {
        assert_eq!(h(3, &[0, 1, 2, 3, 4, 5, 6, 8, 7]), 1);
        let grid = Grid::new(3).unwrap();
        let state = pack(&[0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap();
        assert_eq!(linear_conflict(&grid, state), 0);
    }

    #[test]
    fn reversed_pair_in_row_adds_two() {
        assert_eq!(h(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8]), 4);
    }

    #[test]
    fn reversed_pair_in_column_adds_two() {
        assert_eq!(h(3, &[3, 1, 2, 0, 4, 5, 6, 7, 8]), 4);
    }

    #[test]
    fn reversed_triple_needs_two_tiles_to_leave() {
        // Manhattan 4, two of the three tiles must leave the row.
        assert_eq!(h(3, &[2, 1, 0, 3, 4, 5, 6, 7, 8]), 8);
    }

    #[test]
    fn stays_below_known_distances() {
        // Optimal distances 26 and 26.
        assert_eq!(h(3, &[2, 7, 0, 5, 4, 3, 8, 1, 6]), 24);
        assert_eq!(h(3, &[7, 6, 8, 5, 4, 3, 2, 1, 0]), 26);
    }

    #[test]
    fn longest_increasing_run() {
        assert_eq!(longest_increasing(&[]), 0);
        assert_eq!(longest_increasing(&[3]), 1);
        assert_eq!(longest_increasing(&[3, 2, 1, 0]), 1);
        assert_eq!(longest_increasing(&[0, 3, 1, 2]), 3);
    }
}
