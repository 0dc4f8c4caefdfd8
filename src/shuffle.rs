//! Scrambling by a randomized breadth-first walk out of the goal.
//!
//! The walk pops nodes by depth only, so the first fresh node at the target
//! depth is exactly that many moves from the goal. Neighbor order is shuffled
//! at every expansion, which changes *which* board is found but not its
//! distance.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::arena::{BreadthFirst, Node, NodeArena};
use crate::error::{PuzzleError, Result};
use crate::grid::Grid;
use crate::moves::Move;
use crate::neighbors::neighbors;
use crate::solver::SearchLimits;
use crate::state::{unpack, TileState};

#[derive(Debug, Clone, Copy)]
pub struct Shuffler {
    grid: Grid,
    limits: SearchLimits,
}

impl Shuffler {
    pub fn new(side: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(side)?,
            limits: SearchLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Scrambles the solved board in `labels` to one `distance` moves away.
    ///
    /// Returns the blank's path out of the goal; replaying it on a solved
    /// board reproduces the new `labels`. On error `labels` is untouched.
    pub fn shuffle<R: Rng + ?Sized>(
        &self,
        labels: &mut [u8],
        distance: usize,
        rng: &mut R,
    ) -> Result<Vec<Move>> {
        self.grid.validate(labels)?;
        if labels.iter().enumerate().any(|(i, &label)| label as usize != i) {
            return Err(PuzzleError::NotSolved);
        }

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("shuffle", side = self.grid.side(), distance);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (state, moves) = self.walk(distance, rng)?;
        labels.copy_from_slice(&unpack(state, self.grid.total()));

        #[cfg(feature = "tracing")]
        tracing::debug!(moves = moves.len(), "shuffled");

        Ok(moves)
    }

    fn walk<R: Rng + ?Sized>(
        &self,
        distance: usize,
        rng: &mut R,
    ) -> Result<(TileState, Vec<Move>)> {
        let mut nodes = NodeArena::<BreadthFirst>::new();
        let mut closed: FxHashSet<TileState> = FxHashSet::default();
        let mut expanded = 0;
        let mut deepest = 0;

        nodes.insert(Node::root(self.grid.goal(), self.grid.total() - 1, 0));

        while let Some(id) = nodes.pop() {
            let current = *nodes.node(id);
            if !closed.insert(current.state) {
                continue;
            }

            let depth = current.g as usize;
            deepest = deepest.max(depth);
            if depth == distance {
                return Ok((current.state, nodes.path_to(id)));
            }

            expanded += 1;
            if self.limits.exceeded(expanded) {
                return Err(PuzzleError::BudgetExhausted { expanded });
            }

            let mut next = neighbors(&self.grid, current.state, current.blank);
            next.shuffle(rng);
            for neighbor in next {
                if closed.contains(&neighbor.state) {
                    continue;
                }
                nodes.insert(Node {
                    state: neighbor.state,
                    blank: neighbor.blank,
                    g: current.g + 1,
                    h: 0,
                    mv: Some(neighbor.mv),
                    parent: Some(id),
                });
            }
        }

        Err(PuzzleError::TargetUnreachable {
            target: distance,
            deepest,
        })
    }
}

/// Scrambles a solved `side × side` board in place to `distance` moves from
/// the goal and returns the blank's path.
pub fn shuffle<R: Rng + ?Sized>(
    side: usize,
    labels: &mut [u8],
    distance: usize,
    rng: &mut R,
) -> Result<Vec<Move>> {
    Shuffler::new(side)?.shuffle(labels, distance, rng)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::moves::{apply_moves, undo_moves};
    use crate::solver::solve;

    #[test]
    fn scramble_is_exactly_the_requested_distance() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut labels: Vec<u8> = (0..9).collect();
        let moves = shuffle(3, &mut labels, 12, &mut rng).unwrap();

        assert_eq!(moves.len(), 12);
        assert_eq!(solve(3, &labels).unwrap().len(), 12);
    }

    #[test]
    fn returned_path_replays_onto_the_goal() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut labels: Vec<u8> = (0..16).collect();
        let moves = shuffle(4, &mut labels, 8, &mut rng).unwrap();

        let mut replayed: Vec<u8> = (0..16).collect();
        apply_moves(4, &mut replayed, &moves).unwrap();
        assert_eq!(replayed, labels);

        apply_moves(4, &mut replayed, &undo_moves(&moves)).unwrap();
        assert_eq!(replayed, (0..16).collect::<Vec<u8>>());
    }

    #[test]
    fn seeds_lead_to_different_boards() {
        let boards: FxHashSet<Vec<u8>> = (0..8)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut labels: Vec<u8> = (0..9).collect();
                shuffle(3, &mut labels, 10, &mut rng).unwrap();
                labels
            })
            .collect();
        assert!(boards.len() > 1);
    }

    #[test]
    fn zero_distance_leaves_goal() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut labels: Vec<u8> = (0..4).collect();
        assert_eq!(shuffle(2, &mut labels, 0, &mut rng), Ok(vec![]));
        assert_eq!(labels, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unreachable_depth_keeps_the_board() {
        // The 2x2 state graph is a single cycle of 12 boards.
        let mut rng = StdRng::seed_from_u64(3);
        let mut labels: Vec<u8> = (0..4).collect();
        let err = shuffle(2, &mut labels, 7, &mut rng).unwrap_err();

        assert_eq!(
            err,
            PuzzleError::TargetUnreachable {
                target: 7,
                deepest: 6
            }
        );
        assert!(!err.is_precondition());
        assert_eq!(labels, vec![0, 1, 2, 3]);
    }

    #[test]
    fn requires_a_solved_start() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut labels = vec![1, 0, 2, 3];
        assert_eq!(
            shuffle(2, &mut labels, 2, &mut rng),
            Err(PuzzleError::NotSolved)
        );
        assert_eq!(
            shuffle(3, &mut labels, 2, &mut rng),
            Err(PuzzleError::LabelCount {
                expected: 9,
                found: 4
            })
        );
    }

    #[test]
    fn budget_applies_to_the_walk() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut labels: Vec<u8> = (0..16).collect();
        let shuffler = Shuffler::new(4)
            .unwrap()
            .with_limits(SearchLimits::max_expansions(10));
        assert_eq!(
            shuffler.shuffle(&mut labels, 20, &mut rng),
            Err(PuzzleError::BudgetExhausted { expanded: 11 })
        );
    }
}
