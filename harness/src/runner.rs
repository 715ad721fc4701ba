//! Search runner: one timed, audited search over a sliding-tile problem.
//!
//! # Pipeline
//!
//! ```text
//! build_run_policy() → search_with_policy() (timed)
//!   → cost_of_actions() replay → cost cross-check
//!   → trace_digest() → RunRecord
//! ```
//!
//! The runner never tracks cost itself. The reported path cost is the
//! problem's replay of the returned actions, and a disagreement with the
//! engine's own accounting is an error, not a warning.

use std::time::{Duration, Instant};

use tracing::info;

use tessera_kernel::carrier::board::Board;
use tessera_kernel::carrier::moves::{Move, MoveError};
use tessera_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tessera_kernel::proof::hash::{canonical_hash, ContentHash};
use tessera_kernel::proof::hash_domain::HashDomain;
use tessera_search::contract::SearchProblem;
use tessera_search::error::SearchError;
use tessera_search::search::search_with_policy;
use tessera_search::trace::{TerminationReason, TraceEntry, TraceStep};

use crate::heuristics::HeuristicKind;
use crate::policy::{build_run_policy, PolicyBuildError, RunPolicyConfig, RunSelection};
use crate::report::ComparisonTable;
use crate::worlds::sliding_tile::SlidingTileProblem;

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub selection: RunSelection,
    pub actions: Vec<Move>,
    pub trace: Vec<TraceEntry<Board, Move>>,
    /// Replayed cost of `actions` (0 when no goal was reached).
    pub path_cost: i64,
    pub depth: usize,
    pub nodes_expanded: u64,
    pub duplicates_suppressed: u64,
    pub frontier_high_water: u64,
    pub termination: TerminationReason,
    /// Wall-clock time spent inside the search loop.
    pub elapsed: Duration,
    pub trace_digest: ContentHash,
    pub policy_digest: ContentHash,
}

impl RunRecord {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Digest over every field except `elapsed`.
    ///
    /// Two runs of the same selection on the same problem under the same
    /// config always agree on this digest.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn record_digest(&self) -> Result<ContentHash, CanonError> {
        let actions: Vec<&str> = self.actions.iter().map(|mv| mv.name()).collect();
        let basis = serde_json::json!({
            "actions": actions,
            "depth": self.depth,
            "duplicates_suppressed": self.duplicates_suppressed,
            "frontier_high_water": self.frontier_high_water,
            "heuristic": self.selection.heuristic().map(HeuristicKind::name),
            "nodes_expanded": self.nodes_expanded,
            "path_cost": self.path_cost,
            "policy_digest": self.policy_digest.as_str(),
            "strategy": self.selection.strategy().name(),
            "termination": self.termination.tag(),
            "trace_digest": self.trace_digest.as_str(),
        });
        let bytes = canonical_json_bytes(&basis)?;
        Ok(canonical_hash(HashDomain::RunRecord, &bytes))
    }
}

/// Error during a search run.
#[derive(Debug)]
pub enum RunError {
    /// Policy snapshot construction failed.
    PolicyBuildFailed(PolicyBuildError),
    /// The engine reported an error.
    SearchFailed(SearchError<MoveError>),
    /// Replaying the returned actions failed.
    ReplayFailed(MoveError),
    /// Engine and replay disagree on the path cost.
    CostMismatch { engine: i64, replayed: i64 },
    /// Trace hashing failed.
    HashFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolicyBuildFailed(e) => write!(f, "{e}"),
            Self::SearchFailed(e) => write!(f, "search failed: {e}"),
            Self::ReplayFailed(e) => write!(f, "solution replay failed: {e}"),
            Self::CostMismatch { engine, replayed } => write!(
                f,
                "path cost mismatch: engine tracked {engine}, replay gives {replayed}"
            ),
            Self::HashFailed { detail } => write!(f, "trace hashing failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PolicyBuildFailed(e) => Some(e),
            Self::SearchFailed(e) => Some(e),
            Self::ReplayFailed(e) => Some(e),
            Self::CostMismatch { .. } | Self::HashFailed { .. } => None,
        }
    }
}

/// Digest of a search trace under [`HashDomain::SearchTrace`].
///
/// Each entry commits to the full tile arrangement and the step name
/// (`up`, .., `goal_reached`).
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails.
pub fn trace_digest(trace: &[TraceEntry<Board, Move>]) -> Result<ContentHash, CanonError> {
    let entries: Vec<serde_json::Value> = trace
        .iter()
        .map(|entry| {
            let step = match &entry.step {
                TraceStep::Action(mv) => mv.name(),
                TraceStep::GoalReached => "goal_reached",
            };
            serde_json::json!({
                "state": entry.state.tiles(),
                "step": step,
            })
        })
        .collect();
    let bytes = canonical_json_bytes(&serde_json::Value::Array(entries))?;
    Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
}

/// Run one selection on `problem`.
///
/// # Errors
///
/// Returns [`RunError`] if the policy cannot be built, the engine fails,
/// the returned actions do not replay, or the replayed cost disagrees with
/// the engine's.
pub fn run_search(
    problem: &SlidingTileProblem,
    selection: RunSelection,
    config: &RunPolicyConfig,
) -> Result<RunRecord, RunError> {
    let policy = build_run_policy(&selection, config).map_err(RunError::PolicyBuildFailed)?;
    let search_policy = config.search_policy(selection.strategy());
    let heuristic = selection.heuristic().map(HeuristicKind::heuristic);

    let started = Instant::now();
    let result =
        search_with_policy(problem, &search_policy, heuristic).map_err(RunError::SearchFailed)?;
    let elapsed = started.elapsed();

    let replayed = problem
        .cost_of_actions(&result.actions)
        .map_err(RunError::ReplayFailed)?;
    if replayed != result.path_cost {
        return Err(RunError::CostMismatch {
            engine: result.path_cost,
            replayed,
        });
    }

    let trace_digest = trace_digest(&result.trace).map_err(|e| RunError::HashFailed {
        detail: e.to_string(),
    })?;

    info!(
        run = %selection.label(),
        termination = %result.termination,
        path_cost = replayed,
        depth = result.depth,
        nodes_expanded = result.nodes_expanded,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "search run finished"
    );

    Ok(RunRecord {
        selection,
        actions: result.actions,
        trace: result.trace,
        path_cost: replayed,
        depth: result.depth,
        nodes_expanded: result.nodes_expanded,
        duplicates_suppressed: result.duplicates_suppressed,
        frontier_high_water: result.frontier_high_water,
        termination: result.termination,
        elapsed,
        trace_digest,
        policy_digest: policy.digest,
    })
}

/// Run every selection in `lineup` and append a row per run to `table`.
///
/// Stops at the first failing run; rows already appended stay.
///
/// # Errors
///
/// Propagates the first [`RunError`].
pub fn run_comparison(
    problem: &SlidingTileProblem,
    lineup: &[RunSelection],
    config: &RunPolicyConfig,
    table: &mut ComparisonTable,
) -> Result<(), RunError> {
    for &selection in lineup {
        let record = run_search(problem, selection, config)?;
        table.push(&record);
    }
    Ok(())
}
