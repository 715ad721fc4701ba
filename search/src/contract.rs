//! Search problem contract trait.

use std::hash::Hash;

/// A successor produced by [`SearchProblem::successors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    /// Non-negative incremental cost of taking `action`.
    pub step_cost: i64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, step_cost: i64) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

/// Trait for problems that support search.
///
/// # Contract
///
/// - `State` equality and hashing must be structural: two states that
///   represent the same position compare equal and hash equal.
/// - `successors` must be deterministic: same state → same successors in
///   the same order. Search determinism depends on it.
/// - Step costs must be non-negative.
/// - The engine only borrows the problem; implementations must not rely on
///   being mutated between calls.
pub trait SearchProblem {
    /// Opaque search position.
    type State: Clone + Eq + Hash;
    /// Label of a transition between states.
    type Action: Clone;
    /// Domain error, passed through the engine unchanged.
    type Error;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All transitions out of `state`, in a deterministic order.
    ///
    /// # Errors
    ///
    /// Returns the problem's error if successors cannot be generated.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<Successor<Self::State, Self::Action>>, Self::Error>;

    /// Total cost of taking `actions` from the start state.
    ///
    /// # Errors
    ///
    /// Returns the problem's error if the sequence contains an illegal action.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Result<i64, Self::Error>;
}
