//! # Sliding-tile puzzle core
//!
//! Optimal solving, solvability checks and distance-exact scrambling for
//! square sliding puzzles up to 4×4. Boards are flat row-major label arrays:
//! label `i` belongs in cell `i` and the highest label is the blank. Moves are
//! unit vectors naming the direction the blank travels.
//!
//! ```rust
//! use slide_puzzle::{is_solvable, shuffle, solve};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut board: Vec<u8> = (0..9).collect();
//! let scramble = shuffle(3, &mut board, 10, &mut rng).unwrap();
//!
//! assert!(is_solvable(3, &board).unwrap());
//! let moves = solve(3, &board).unwrap();
//! assert_eq!(moves.len(), scramble.len());
//! ```

pub mod arena;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod moves;
pub mod neighbors;
pub mod puzzle;
pub mod shuffle;
pub mod solvable;
pub mod solver;
pub mod state;

pub use error::{PuzzleError, Result};
pub use grid::{Grid, MAX_SIDE};
pub use moves::{apply_moves, undo_moves, Move};
pub use puzzle::Puzzle;
pub use shuffle::{shuffle, Shuffler};
pub use solvable::is_solvable;
pub use solver::{solve, SearchLimits, Solution, Solver};
pub use state::TileState;
