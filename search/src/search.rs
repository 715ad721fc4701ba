//! Search entry point and expansion loop.
//!
//! One loop serves all five strategies. The strategy decides the frontier
//! discipline and the priority of each pushed child; everything else
//! (pop-time goal test, visited set, trace, counters) is shared.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::node::{PathArena, SearchNode};
use crate::policy::{SearchPolicy, Strategy};
use crate::trace::{TerminationReason, TraceEntry, TraceStep};

/// Result of a search invocation.
///
/// Created once when the loop stops and handed to the caller; the engine
/// keeps nothing. On anything but [`TerminationReason::GoalReached`],
/// `actions` is empty and `depth` and `path_cost` are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<S, A> {
    /// Actions from the start state to the goal.
    pub actions: Vec<A>,
    /// Number of distinct states expanded.
    pub nodes_expanded: u64,
    /// Every successor push as `(expanded state, action)`, plus a final
    /// `(goal, GoalReached)` entry on success.
    pub trace: Vec<TraceEntry<S, A>>,
    /// Length of `actions`.
    pub depth: usize,
    /// Accumulated cost of `actions` as tracked by the engine.
    pub path_cost: i64,
    /// Why the loop stopped.
    pub termination: TerminationReason,
    /// Popped nodes discarded because their state was already expanded.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl<S, A> SearchResult<S, A> {
    /// Returns `true` if the search stopped on a goal.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }
}

/// Outcome of a search over problem `P`.
pub type SearchOutcome<P> = Result<
    SearchResult<<P as SearchProblem>::State, <P as SearchProblem>::Action>,
    SearchError<<P as SearchProblem>::Error>,
>;

/// Run `strategy` on `problem` without an expansion budget.
///
/// `heuristic` is consulted by greedy best-first and A* only; when absent
/// they use [`ZeroHeuristic`].
///
/// # Errors
///
/// See [`search_with_policy`].
pub fn search<P: SearchProblem + ?Sized>(
    problem: &P,
    strategy: Strategy,
    heuristic: Option<&dyn Heuristic<P>>,
) -> SearchOutcome<P> {
    search_with_policy(problem, &SearchPolicy::new(strategy), heuristic)
}

/// Run a search under `policy`.
///
/// Frontier exhaustion and budget exhaustion are successful outcomes with an
/// empty action sequence; inspect [`SearchResult::termination`].
///
/// # Errors
///
/// - [`SearchError::Problem`] if the problem fails to generate successors.
/// - [`SearchError::NegativeStepCost`] if a successor has a negative cost.
/// - [`SearchError::NegativeHeuristic`] if the heuristic returns a negative
///   estimate.
/// - [`SearchError::Frontier`] if the frontier contract is violated.
pub fn search_with_policy<P: SearchProblem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
    heuristic: Option<&dyn Heuristic<P>>,
) -> SearchOutcome<P> {
    let strategy = policy.strategy;
    let heuristic: &dyn Heuristic<P> = heuristic.unwrap_or(&ZeroHeuristic);

    let mut frontier = Frontier::new(strategy.discipline());
    let mut arena: PathArena<P::Action> = PathArena::new();
    let mut visited: HashSet<P::State> = HashSet::new();
    let mut trace: Vec<TraceEntry<P::State, P::Action>> = Vec::new();
    let mut nodes_expanded: u64 = 0;
    let mut duplicates_suppressed: u64 = 0;

    debug!(
        strategy = %strategy,
        heuristic = heuristic.name(),
        max_expansions = ?policy.max_expansions,
        "search started"
    );

    let root_id = arena.push_root();
    frontier.push(SearchNode::root(root_id, problem.start_state()), 0);

    let termination = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }

        let current = frontier.pop()?;

        // Goal test at pop time, before the visited check and expansion.
        if problem.is_goal(&current.state) {
            let actions = arena.actions_to(current.node_id);
            debug!(
                strategy = %strategy,
                nodes_expanded,
                depth = actions.len(),
                path_cost = current.g_cost,
                "goal reached"
            );
            trace.push(TraceEntry {
                state: current.state,
                step: TraceStep::GoalReached,
            });
            return Ok(SearchResult {
                depth: actions.len(),
                actions,
                nodes_expanded,
                trace,
                path_cost: current.g_cost,
                termination: TerminationReason::GoalReached,
                duplicates_suppressed,
                frontier_high_water: frontier.high_water(),
            });
        }

        if !visited.insert(current.state.clone()) {
            duplicates_suppressed += 1;
            continue;
        }
        // The budget caps expansions only; goals and duplicates are still
        // popped once it is spent.
        if policy.budget_exhausted(nodes_expanded) {
            let max_expansions = policy.max_expansions.unwrap_or(nodes_expanded);
            break TerminationReason::ExpansionBudgetExceeded { max_expansions };
        }
        nodes_expanded += 1;
        trace!(
            expansion = nodes_expanded,
            depth = current.depth,
            g_cost = current.g_cost,
            h_cost = current.h_cost,
            frontier_len = frontier.len(),
            "expanding node"
        );

        for successor in problem
            .successors(&current.state)
            .map_err(SearchError::Problem)?
        {
            if successor.step_cost < 0 {
                return Err(SearchError::NegativeStepCost {
                    step_cost: successor.step_cost,
                    depth: current.depth + 1,
                });
            }
            if visited.contains(&successor.state) {
                continue;
            }

            let g_cost = current.g_cost.saturating_add(successor.step_cost);
            let h_cost = if strategy.is_informed() {
                let estimate = heuristic.estimate(&successor.state, problem);
                if estimate < 0 {
                    return Err(SearchError::NegativeHeuristic {
                        heuristic: heuristic.name().to_string(),
                        estimate,
                    });
                }
                estimate
            } else {
                0
            };

            let node_id = arena.push_child(current.node_id, successor.action.clone());
            trace.push(TraceEntry {
                state: current.state.clone(),
                step: TraceStep::Action(successor.action),
            });
            frontier.push(
                SearchNode {
                    node_id,
                    state: successor.state,
                    depth: current.depth + 1,
                    g_cost,
                    h_cost,
                },
                strategy.priority(g_cost, h_cost),
            );
        }
    };

    debug!(
        strategy = %strategy,
        nodes_expanded,
        termination = %termination,
        "search stopped without reaching a goal"
    );

    Ok(SearchResult {
        actions: Vec::new(),
        nodes_expanded,
        trace,
        depth: 0,
        path_cost: 0,
        termination,
        duplicates_suppressed,
        frontier_high_water: frontier.high_water(),
    })
}

/// Breadth-first search.
///
/// # Errors
///
/// See [`search_with_policy`].
pub fn breadth_first<P: SearchProblem + ?Sized>(problem: &P) -> SearchOutcome<P> {
    search(problem, Strategy::BreadthFirst, None)
}

/// Depth-first search.
///
/// # Errors
///
/// See [`search_with_policy`].
pub fn depth_first<P: SearchProblem + ?Sized>(problem: &P) -> SearchOutcome<P> {
    search(problem, Strategy::DepthFirst, None)
}

/// Uniform-cost search.
///
/// # Errors
///
/// See [`search_with_policy`].
pub fn uniform_cost<P: SearchProblem + ?Sized>(problem: &P) -> SearchOutcome<P> {
    search(problem, Strategy::UniformCost, None)
}

/// Greedy best-first search ordered by `heuristic` alone.
///
/// # Errors
///
/// See [`search_with_policy`].
pub fn greedy_best_first<P: SearchProblem + ?Sized>(
    problem: &P,
    heuristic: &dyn Heuristic<P>,
) -> SearchOutcome<P> {
    search(problem, Strategy::GreedyBestFirst, Some(heuristic))
}

/// A* search ordered by accumulated cost plus `heuristic`.
///
/// # Errors
///
/// See [`search_with_policy`].
pub fn a_star<P: SearchProblem + ?Sized>(
    problem: &P,
    heuristic: &dyn Heuristic<P>,
) -> SearchOutcome<P> {
    search(problem, Strategy::AStar, Some(heuristic))
}
