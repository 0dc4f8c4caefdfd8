//! A* search from a scrambled board to the goal.

use rustc_hash::FxHashSet;

use crate::arena::{BestFirst, Node, NodeArena};
use crate::error::{PuzzleError, Result};
use crate::grid::Grid;
use crate::heuristic::heuristic;
use crate::moves::Move;
use crate::neighbors::neighbors;
use crate::solvable::parity_allows;
use crate::state::{pack, TileState};

/// Caps on how much work one search may do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of nodes expanded before giving up. `None` is unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn max_expansions(limit: usize) -> Self {
        Self {
            max_expansions: Some(limit),
        }
    }

    pub(crate) fn exceeded(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|limit| expanded > limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    /// Nodes expanded to find `moves`.
    pub expanded: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Solver {
    grid: Grid,
    limits: SearchLimits,
}

impl Solver {
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

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shortest blank-move sequence taking `labels` to the goal.
    pub fn solve(&self, labels: &[u8]) -> Result<Vec<Move>> {
        self.search(labels).map(|solution| solution.moves)
    }

    pub fn search(&self, labels: &[u8]) -> Result<Solution> {
        self.grid.validate(labels)?;
        if !parity_allows(&self.grid, labels) {
            return Err(PuzzleError::Unsolvable);
        }

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("solve", side = self.grid.side());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let start = pack(labels)?;
        let blank = self.grid.blank_index(labels);
        let result = self.run(start, blank);

        #[cfg(feature = "tracing")]
        log_outcome(&result);

        result
    }

    fn run(&self, start: TileState, blank: usize) -> Result<Solution> {
        let goal = self.grid.goal();
        let mut nodes = NodeArena::<BestFirst>::new();
        let mut closed: FxHashSet<TileState> = FxHashSet::default();
        let mut expanded = 0;

        nodes.insert(Node::root(start, blank, heuristic(&self.grid, start)));

        while let Some(id) = nodes.pop() {
            let current = *nodes.node(id);
            if !closed.insert(current.state) {
                continue;
            }

            if current.state == goal {
                return Ok(Solution {
                    moves: nodes.path_to(id),
                    expanded,
                });
            }

            expanded += 1;
            if self.limits.exceeded(expanded) {
                return Err(PuzzleError::BudgetExhausted { expanded });
            }

            for neighbor in neighbors(&self.grid, current.state, current.blank) {
                if closed.contains(&neighbor.state) {
                    continue;
                }
                nodes.insert(Node {
                    state: neighbor.state,
                    blank: neighbor.blank,
                    g: current.g + 1,
                    h: heuristic(&self.grid, neighbor.state),
                    mv: Some(neighbor.mv),
                    parent: Some(id),
                });
            }
        }

        Err(PuzzleError::NoPath)
    }
}

#[cfg(feature = "tracing")]
fn log_outcome(result: &Result<Solution>) {
    match result {
        Ok(solution) => tracing::debug!(
            moves = solution.moves.len(),
            expanded = solution.expanded,
            "solved"
        ),
        Err(err) => tracing::debug!(%err, "search failed"),
    }
}

/// Solves `labels` on a `side × side` grid with no search budget.
pub fn solve(side: usize, labels: &[u8]) -> Result<Vec<Move>> {
    Solver::new(side)?.solve(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::apply_moves;

    #[test]
    fn solved_board_needs_no_moves() {
        assert_eq!(solve(3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]), Ok(vec![]));
        assert_eq!(solve(1, &[0]), Ok(vec![]));
    }

    #[test]
    fn undoes_a_two_move_scramble() {
        // Tiles slid right then down, so the blank went left then up.
        let mut labels = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        apply_moves(3, &mut labels, &[Move::Left, Move::Up]).unwrap();

        let moves = solve(3, &labels).unwrap();
        assert_eq!(moves, vec![Move::Down, Move::Right]);
        let offsets: Vec<_> = moves.iter().map(Move::as_offset).collect();
        assert_eq!(offsets, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn solution_replays_to_goal() {
        let mut labels = [3, 1, 5, 0, 8, 2, 7, 6, 4];
        let moves = solve(3, &labels).unwrap();
        assert_eq!(moves.len(), 22);
        apply_moves(3, &mut labels, &moves).unwrap();
        assert_eq!(labels, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn hard_eight_puzzle_is_solved_optimally() {
        // One of the two 3x3 boards at the maximum distance of 31.
        let labels = [5, 3, 6, 7, 4, 8, 2, 1, 0];
        let moves = solve(3, &labels).unwrap();
        assert_eq!(moves.len(), 31);
    }

    #[test]
    fn unsolvable_board_is_reported_without_searching() {
        let labels = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 13, 15];
        assert_eq!(solve(4, &labels), Err(PuzzleError::Unsolvable));
    }

    #[test]
    fn budget_exhaustion_is_distinct_from_unsolvable() {
        let solver = Solver::new(3)
            .unwrap()
            .with_limits(SearchLimits::max_expansions(3));
        let err = solver.solve(&[5, 3, 6, 7, 4, 8, 2, 1, 0]).unwrap_err();
        assert_eq!(err, PuzzleError::BudgetExhausted { expanded: 4 });
        assert!(!err.is_precondition());
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(solve(3, &[0, 1, 2, 3]).unwrap_err().is_precondition());
        assert_eq!(solve(0, &[]), Err(PuzzleError::InvalidSide(0)));
    }

    #[test]
    fn search_reports_expansions() {
        let solution = Solver::new(3)
            .unwrap()
            .search(&[0, 1, 2, 3, 4, 5, 6, 8, 7])
            .unwrap();
        assert_eq!(solution.moves, vec![Move::Right]);
        assert_eq!(solution.expanded, 1);
    }
}
