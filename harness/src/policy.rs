//! Run policy: which strategy and heuristic run, under which budget.
//!
//! The runner derives a [`RunPolicySnapshot`] from the selection and config.
//! The snapshot is canonical JSON and its digest is stamped on every
//! [`RunRecord`](crate::runner::RunRecord), so two records with equal policy
//! digests were produced under identical search conditions.

use tessera_kernel::proof::canon::canonical_json_bytes;
use tessera_kernel::proof::hash::{canonical_hash, ContentHash};
use tessera_kernel::proof::hash_domain::HashDomain;
use tessera_search::policy::{SearchPolicy, Strategy};

use crate::heuristics::HeuristicKind;

/// Strategy plus the heuristic it consults.
///
/// Uninformed strategies never carry a heuristic; [`RunSelection::new`]
/// drops one if given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunSelection {
    strategy: Strategy,
    heuristic: Option<HeuristicKind>,
}

impl RunSelection {
    #[must_use]
    pub fn new(strategy: Strategy, heuristic: Option<HeuristicKind>) -> Self {
        Self {
            strategy,
            heuristic: heuristic.filter(|_| strategy.is_informed()),
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub const fn heuristic(&self) -> Option<HeuristicKind> {
        self.heuristic
    }

    /// Report label, e.g. `A* (manhattan)` or `BFS`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.heuristic {
            Some(h) => format!("{} ({h})", self.strategy.label()),
            None => self.strategy.label().to_string(),
        }
    }
}

/// The line-up run by a comparison: every uninformed strategy once, every
/// informed strategy once per heuristic.
#[must_use]
pub fn comparison_lineup() -> Vec<RunSelection> {
    let mut lineup = Vec::new();
    for strategy in Strategy::ALL {
        if strategy.is_informed() {
            for kind in HeuristicKind::ALL {
                lineup.push(RunSelection::new(strategy, Some(kind)));
            }
        } else {
            lineup.push(RunSelection::new(strategy, None));
        }
    }
    lineup
}

/// Runner-supplied limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunPolicyConfig {
    /// Expansion cap per run. `None` is unbounded.
    pub max_expansions: Option<u64>,
}

impl RunPolicyConfig {
    /// Engine policy for `strategy` under this config.
    #[must_use]
    pub fn search_policy(&self, strategy: Strategy) -> SearchPolicy {
        let policy = SearchPolicy::new(strategy);
        match self.max_expansions {
            Some(max) => policy.with_max_expansions(max),
            None => policy,
        }
    }
}

/// Canonical policy bytes and their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPolicySnapshot {
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
}

/// Error building a policy snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyBuildError {
    /// Canonical JSON serialization failed.
    CanonError { detail: String },
}

impl std::fmt::Display for PolicyBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CanonError { detail } => write!(f, "policy snapshot: {detail}"),
        }
    }
}

impl std::error::Error for PolicyBuildError {}

/// Build the snapshot for one run.
///
/// # Errors
///
/// Returns [`PolicyBuildError`] if canonical JSON serialization fails.
pub fn build_run_policy(
    selection: &RunSelection,
    config: &RunPolicyConfig,
) -> Result<RunPolicySnapshot, PolicyBuildError> {
    let strategy = selection.strategy();
    let snapshot_value = serde_json::json!({
        "budgets": {
            "max_expansions": config.max_expansions,
        },
        "determinism_contract": {
            "goal_test": "pop_time",
            "successor_order": "up_down_left_right",
            "tie_break": "insertion_order",
        },
        "discipline": strategy.discipline().to_string(),
        "heuristic": selection.heuristic().map(HeuristicKind::name),
        "schema_version": "run_policy.v1",
        "strategy": strategy.name(),
    });

    let bytes =
        canonical_json_bytes(&snapshot_value).map_err(|e| PolicyBuildError::CanonError {
            detail: e.to_string(),
        })?;
    let digest = canonical_hash(HashDomain::RunPolicy, &bytes);
    Ok(RunPolicySnapshot { bytes, digest })
}
