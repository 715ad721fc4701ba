//! Typed search errors.
//!
//! Search exhaustion and budget cut-offs are not errors; they are
//! [`crate::trace::TerminationReason`] values on a successful result.
//! `SearchError` covers problem faults and broken preconditions only.

use crate::frontier::Discipline;

/// Precondition violation on the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `pop()` was called on an empty frontier.
    EmptyPop { discipline: Discipline },
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPop { discipline } => {
                write!(f, "pop from empty {discipline} frontier")
            }
        }
    }
}

impl std::error::Error for FrontierError {}

/// Typed failure for a search invocation.
///
/// `E` is the problem's own error type, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<E> {
    /// The problem failed (successor generation, cost evaluation).
    Problem(E),
    /// A successor carried a negative step cost.
    NegativeStepCost { step_cost: i64, depth: u32 },
    /// A heuristic returned a negative estimate.
    NegativeHeuristic { heuristic: String, estimate: i64 },
    /// The frontier contract was violated.
    Frontier(FrontierError),
}

impl<E> From<FrontierError> for SearchError<E> {
    fn from(err: FrontierError) -> Self {
        Self::Frontier(err)
    }
}

impl<E: std::fmt::Display> std::fmt::Display for SearchError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Problem(err) => write!(f, "problem error: {err}"),
            Self::NegativeStepCost { step_cost, depth } => write!(
                f,
                "negative step cost {step_cost} for successor at depth {depth}"
            ),
            Self::NegativeHeuristic {
                heuristic,
                estimate,
            } => write!(f, "heuristic {heuristic:?} returned negative estimate {estimate}"),
            Self::Frontier(err) => write!(f, "frontier invariant violated: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SearchError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Problem(err) => Some(err),
            Self::Frontier(err) => Some(err),
            Self::NegativeStepCost { .. } | Self::NegativeHeuristic { .. } => None,
        }
    }
}
