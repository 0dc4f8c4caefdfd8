use crate::moves::Move;

/// Everything that can go wrong when driving the puzzle core.
///
/// The first group are caller contract violations; the rest are outcomes a
/// host is expected to handle (unsolvable boards, budgets, unreachable depths).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("grid side {0} is outside the supported range 1..=4")]
    InvalidSide(usize),
    #[error("expected {expected} labels, got {found}")]
    LabelCount { expected: usize, found: usize },
    #[error("label {label} at cell {index} is out of range for {total} tiles")]
    LabelOutOfRange {
        index: usize,
        label: u8,
        total: usize,
    },
    #[error("label {0} appears more than once")]
    DuplicateLabel(u8),
    #[error("shuffle must start from the solved board")]
    NotSolved,
    #[error("move {mv} at step {step} leaves the board")]
    IllegalMove { step: usize, mv: Move },
    #[error("board is not solvable")]
    Unsolvable,
    #[error("search gave up after {expanded} expansions")]
    BudgetExhausted { expanded: usize },
    #[error("search space exhausted without reaching the goal")]
    NoPath,
    #[error("no board at distance {target}; deepest reachable is {deepest}")]
    TargetUnreachable { target: usize, deepest: usize },
}

impl PuzzleError {
    /// True for programmer errors (malformed input) as opposed to search outcomes.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            PuzzleError::InvalidSide(_)
                | PuzzleError::LabelCount { .. }
                | PuzzleError::LabelOutOfRange { .. }
                | PuzzleError::DuplicateLabel(_)
                | PuzzleError::NotSolved
                | PuzzleError::IllegalMove { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
