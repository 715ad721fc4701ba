//! Named heuristic functions.

use crate::contract::SearchProblem;

/// Estimate of remaining cost from a state to the goal.
///
/// Estimates must be non-negative; the engine rejects negative values.
/// A heuristic always carries the name it was registered under, which is
/// what reports display.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    /// Registered name (e.g., `"manhattan"`).
    fn name(&self) -> &str;

    /// Estimate the remaining cost from `state`.
    fn estimate(&self, state: &P::State, problem: &P) -> i64;
}

/// The null heuristic: always 0.
///
/// Substituted when an informed strategy runs without a heuristic. A* with
/// this heuristic behaves exactly like uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for ZeroHeuristic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "null"
    }

    fn estimate(&self, _state: &P::State, _problem: &P) -> i64 {
        0
    }
}

/// A closure registered under an explicit name.
pub struct FnHeuristic<F> {
    name: String,
    func: F,
}

impl<F> FnHeuristic<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> std::fmt::Debug for FnHeuristic<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHeuristic")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<P, F> Heuristic<P> for FnHeuristic<F>
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> i64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, state: &P::State, problem: &P) -> i64 {
        (self.func)(state, problem)
    }
}
