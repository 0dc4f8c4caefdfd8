//! Bit-packed board encoding.
//!
//! A board is one `u64`: the label at cell `i` lives in the nibble at bit
//! offset `4 * i`. Two boards are equal iff their packed values are equal,
//! so the packed value doubles as the key for closed sets and goal tests.

use crate::error::{PuzzleError, Result};

pub type TileState = u64;

/// Number of cells a `TileState` can hold.
pub const MAX_TILES: usize = 16;

const NIBBLE_MASK: u64 = 0xF;

#[inline]
pub fn get_nibble(state: TileState, index: usize) -> u8 {
    ((state >> (4 * index)) & NIBBLE_MASK) as u8
}

#[inline]
pub fn set_nibble(state: TileState, index: usize, value: u8) -> TileState {
    let shift = 4 * index;
    (state & !(NIBBLE_MASK << shift)) | ((u64::from(value) & NIBBLE_MASK) << shift)
}

#[inline]
pub fn swap_nibbles(state: TileState, a: usize, b: usize) -> TileState {
    let left = get_nibble(state, a);
    let right = get_nibble(state, b);
    set_nibble(set_nibble(state, a, right), b, left)
}

/// Index of the first cell among `total` holding `value`.
pub fn find_nibble(state: TileState, total: usize, value: u8) -> Option<usize> {
    (0..total).find(|&i| get_nibble(state, i) == value)
}

pub fn pack(labels: &[u8]) -> Result<TileState> {
    if labels.len() > MAX_TILES {
        return Err(PuzzleError::LabelCount {
            expected: MAX_TILES,
            found: labels.len(),
        });
    }

    labels
        .iter()
        .enumerate()
        .try_fold(0, |state, (index, &label)| {
            if u64::from(label) > NIBBLE_MASK {
                return Err(PuzzleError::LabelOutOfRange {
                    index,
                    label,
                    total: MAX_TILES,
                });
            }
            Ok(set_nibble(state, index, label))
        })
}

pub fn unpack(state: TileState, total: usize) -> Vec<u8> {
    (0..total).map(|i| get_nibble(state, i)).collect()
}

/// Board with label `i` at cell `i`, i.e. the blank in the last cell.
pub fn goal(total: usize) -> TileState {
    (0..total).fold(0, |state, i| set_nibble(state, i, i as u8))
}
