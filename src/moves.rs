use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::grid::Grid;

/// Direction the blank travels. The tile next to the blank slides the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    /// Unit vector `(dx, dy)`; `y` grows downwards.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (0, -1),
            Move::Left => (-1, 0),
            Move::Down => (0, 1),
            Move::Right => (1, 0),
        }
    }

    pub fn from_offset(dx: isize, dy: isize) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Move::Up),
            (-1, 0) => Some(Move::Left),
            (0, 1) => Some(Move::Down),
            (1, 0) => Some(Move::Right),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Reverses a move list and negates every step, turning a path into its undo.
pub fn undo_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(Move::opposite).collect()
}

/// Moves the blank from `from` one step in `mv`, if that stays on the board.
pub(crate) fn step(grid: &Grid, from: usize, mv: Move) -> Option<usize> {
    let (x, y) = grid.cell(from);
    let (dx, dy) = mv.as_offset();
    let nx = x as isize + dx;
    let ny = y as isize + dy;
    let side = grid.side() as isize;
    if nx < 0 || nx >= side || ny < 0 || ny >= side {
        return None;
    }
    Some(grid.index(nx as usize, ny as usize))
}

/// Replays blank moves on a flat label array in place.
///
/// On an illegal step the array is left as it was before the call.
pub fn apply_moves(side: usize, labels: &mut [u8], moves: &[Move]) -> Result<()> {
    let grid = Grid::new(side)?;
    grid.validate(labels)?;

    let mut board = labels.to_vec();
    let mut blank = grid.blank_index(&board);
    for (i, &mv) in moves.iter().enumerate() {
        let target = step(&grid, blank, mv).ok_or(PuzzleError::IllegalMove { step: i, mv })?;
        board.swap(blank, target);
        blank = target;
    }

    labels.copy_from_slice(&board);
    Ok(())
}
