//! Search trace entries and termination reasons.

/// What happened at a trace entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TraceStep<A> {
    /// A successor was pushed by taking this action from the entry's state.
    Action(A),
    /// The entry's state was popped and satisfied the goal test.
    GoalReached,
}

impl<A: std::fmt::Display> std::fmt::Display for TraceStep<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action(action) => write!(f, "{action}"),
            Self::GoalReached => f.write_str("Goal Reached"),
        }
    }
}

/// One trace record: `(state, action or terminal marker)`.
///
/// The engine appends `(expanded state, action)` for every successor it
/// pushes, and a final `(goal state, GoalReached)` on success.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceEntry<S, A> {
    pub state: S,
    pub step: TraceStep<A>,
}

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped node satisfied the goal test.
    GoalReached,
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
    /// The policy's expansion budget was used up.
    ExpansionBudgetExceeded { max_expansions: u64 },
}

impl TerminationReason {
    /// Stable tag (`goal_reached`, `frontier_exhausted`,
    /// `expansion_budget_exceeded`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
