//! Permutation-parity test for whether a board can reach the goal.

use crate::error::Result;
use crate::grid::Grid;

/// Whether `labels` can be slid back to the solved board.
///
/// Malformed input is reported as an error instead of a guess.
pub fn is_solvable(side: usize, labels: &[u8]) -> Result<bool> {
    let grid = Grid::new(side)?;
    grid.validate(labels)?;
    Ok(parity_allows(&grid, labels))
}

pub(crate) fn parity_allows(grid: &Grid, labels: &[u8]) -> bool {
    let blank = grid.blank();
    let mut inversions = 0usize;
    for (i, &a) in labels.iter().enumerate() {
        if a == blank {
            continue;
        }
        inversions += labels[i + 1..]
            .iter()
            .filter(|&&b| b != blank && b < a)
            .count();
    }

    let side = grid.side();
    if side % 2 == 1 {
        inversions % 2 == 0
    } else {
        let blank_row_from_bottom = side - grid.blank_index(labels) / side;
        if blank_row_from_bottom % 2 == 0 {
            inversions % 2 == 1
        } else {
            inversions % 2 == 0
        }
    }
}
