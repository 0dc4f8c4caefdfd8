use crate::error::{PuzzleError, Result};
use crate::state::{self, TileState};

/// Largest side whose `side²` labels still fit in a 4-bit nibble each.
pub const MAX_SIDE: usize = 4;

/// Geometry of a `side × side` board. Cells are row-major, the blank is the
/// highest label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    total: usize,
}

impl Grid {
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 || side > MAX_SIDE {
            return Err(PuzzleError::InvalidSide(side));
        }
        Ok(Self {
            side,
            total: side * side,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Label used for the empty cell.
    pub fn blank(&self) -> u8 {
        (self.total - 1) as u8
    }

    /// `(x, y)` of a cell index.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index % self.side, index / self.side)
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.side + x
    }

    pub fn goal(&self) -> TileState {
        state::goal(self.total)
    }

    pub fn goal_labels(&self) -> Vec<u8> {
        (0..self.total as u8).collect()
    }

    /// Checks that `labels` is a permutation of `0..total`.
    pub fn validate(&self, labels: &[u8]) -> Result<()> {
        if labels.len() != self.total {
            return Err(PuzzleError::LabelCount {
                expected: self.total,
                found: labels.len(),
            });
        }

        let mut seen = 0u32;
        for (index, &label) in labels.iter().enumerate() {
            if label as usize >= self.total {
                return Err(PuzzleError::LabelOutOfRange {
                    index,
                    label,
                    total: self.total,
                });
            }
            let bit = 1 << label;
            if seen & bit != 0 {
                return Err(PuzzleError::DuplicateLabel(label));
            }
            seen |= bit;
        }
        Ok(())
    }

    /// Cell holding the blank. `labels` must already be validated.
    pub(crate) fn blank_index(&self, labels: &[u8]) -> usize {
        let blank = self.blank();
        labels
            .iter()
            .position(|&label| label == blank)
            .unwrap_or(self.total - 1)
    }
}
