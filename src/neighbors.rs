use smallvec::SmallVec;

use crate::grid::Grid;
use crate::moves::Move;
use crate::state::{swap_nibbles, TileState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub state: TileState,
    pub blank: usize,
    pub mv: Move,
}

pub type Neighbors = SmallVec<[Neighbor; 4]>;

/// Boards one blank slide away, in the order left, right, up, down.
pub fn neighbors(grid: &Grid, state: TileState, blank: usize) -> Neighbors {
    let side = grid.side();
    let total = grid.total();
    let row = blank / side;
    let mut out = Neighbors::new();

    let horizontal = [
        (blank.checked_sub(1), Move::Left),
        (Some(blank + 1), Move::Right),
    ];
    for (target, mv) in horizontal {
        if let Some(target) = target.filter(|&t| t < total && t / side == row) {
            out.push(Neighbor {
                state: swap_nibbles(state, blank, target),
                blank: target,
                mv,
            });
        }
    }

    let vertical = [
        (blank.checked_sub(side), Move::Up),
        (Some(blank + side), Move::Down),
    ];
    for (target, mv) in vertical {
        if let Some(target) = target.filter(|&t| t < total) {
            out.push(Neighbor {
                state: swap_nibbles(state, blank, target),
                blank: target,
                mv,
            });
        }
    }

    out
}
