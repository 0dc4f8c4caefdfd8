use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::error::Result;
use crate::grid::Grid;
use crate::moves::{self, Move};
use crate::shuffle::Shuffler;
use crate::solvable::parity_allows;
use crate::solver::{SearchLimits, Solver};

/// An owned board that hosts can poke at one move at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    tiles: Vec<u8>,
    blank: usize,
}

impl Puzzle {
    /// Solved board of the given side.
    pub fn new(side: usize) -> Result<Self> {
        let grid = Grid::new(side)?;
        Ok(Self {
            tiles: grid.goal_labels(),
            blank: grid.total() - 1,
            grid,
        })
    }

    pub fn from_labels(side: usize, labels: &[u8]) -> Result<Self> {
        let grid = Grid::new(side)?;
        grid.validate(labels)?;
        Ok(Self {
            blank: grid.blank_index(labels),
            tiles: labels.to_vec(),
            grid,
        })
    }

    pub fn side(&self) -> usize {
        self.grid.side()
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Slides the blank one cell; returns false if that would leave the board.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        match moves::step(&self.grid, self.blank, movement) {
            Some(target) => {
                self.tiles.swap(self.blank, target);
                self.blank = target;
                true
            }
            None => false,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, &label)| label as usize == i)
    }

    pub fn is_solvable(&self) -> bool {
        parity_allows(&self.grid, &self.tiles)
    }

    pub fn solve(&self) -> Result<Vec<Move>> {
        Solver::new(self.side())?.solve(&self.tiles)
    }

    pub fn solve_within(&self, limits: SearchLimits) -> Result<Vec<Move>> {
        Solver::new(self.side())?
            .with_limits(limits)
            .solve(&self.tiles)
    }

    /// Resets to solved, then walks the blank `distance` moves away.
    ///
    /// Returns the path taken from the solved board.
    pub fn shuffle<R: Rng + ?Sized>(
        &mut self,
        distance: usize,
        rng: &mut R,
    ) -> Result<Vec<Move>> {
        let mut tiles = self.grid.goal_labels();
        let path = Shuffler::new(self.side())?.shuffle(&mut tiles, distance, rng)?;
        self.blank = self.grid.blank_index(&tiles);
        self.tiles = tiles;
        Ok(path)
    }

    /// Uniformly random solvable board, with no bound on its distance.
    pub fn shuffle_permutation<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        loop {
            self.tiles.shuffle(rng);
            if parity_allows(&self.grid, &self.tiles) {
                break;
            }
        }
        self.blank = self.grid.blank_index(&self.tiles);
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blank = self.grid.blank();
        for row in self.tiles.chunks(self.side()) {
            for &val in row {
                if val == blank {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{:2} ", val + 1)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
