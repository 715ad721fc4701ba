//! In-process determinism and golden expansion counts.
//!
//! - Repeated runs yield identical record digests.
//! - Interleaving runs on different problems changes nothing (no state
//!   survives between invocations).
//! - Expansion counts, depths and trace lengths are pinned per strategy.

use lock_tests::fixtures::{problem, ELEVEN_MOVES, THREE_MOVES};
use tessera_harness::heuristics::HeuristicKind;
use tessera_harness::policy::{comparison_lineup, RunPolicyConfig, RunSelection};
use tessera_harness::runner::{run_search, RunRecord};
use tessera_search::policy::Strategy;

fn run(start: &[u8], selection: RunSelection) -> RunRecord {
    run_search(&problem(start), selection, &RunPolicyConfig::default()).unwrap()
}

// --- Repetition ---

#[test]
fn determinism_inproc_n10() {
    let selection = RunSelection::new(Strategy::AStar, Some(HeuristicKind::Misplaced));
    let first = run(&ELEVEN_MOVES, selection);
    let first_digest = first.record_digest().unwrap();
    for i in 1..=10 {
        let again = run(&ELEVEN_MOVES, selection);
        assert_eq!(
            again.record_digest().unwrap(),
            first_digest,
            "run {i} diverged from run 0"
        );
        assert_eq!(again.trace, first.trace);
    }
}

#[test]
fn interleaved_problems_do_not_interact() {
    let baseline: Vec<String> = comparison_lineup()
        .into_iter()
        .map(|sel| run(&THREE_MOVES, sel).record_digest().unwrap().to_string())
        .collect();

    let interleaved: Vec<String> = comparison_lineup()
        .into_iter()
        .map(|sel| {
            let _ = run(&ELEVEN_MOVES, sel);
            run(&THREE_MOVES, sel).record_digest().unwrap().to_string()
        })
        .collect();

    assert_eq!(baseline, interleaved);
}

#[test]
fn budget_changes_policy_digest_not_solution() {
    let selection = RunSelection::new(Strategy::AStar, Some(HeuristicKind::Manhattan));
    let unbounded = run(&THREE_MOVES, selection);
    let bounded = run_search(
        &problem(&THREE_MOVES),
        selection,
        &RunPolicyConfig {
            max_expansions: Some(1_000),
        },
    )
    .unwrap();
    assert_eq!(unbounded.actions, bounded.actions);
    assert_eq!(unbounded.trace_digest, bounded.trace_digest);
    assert_ne!(unbounded.policy_digest, bounded.policy_digest);
}

// --- Golden counts ---

/// `(label, nodes_expanded, depth, trace_len)` on the eleven-move fixture.
const ELEVEN_MOVE_GOLDEN: [(&str, u64, usize, usize); 7] = [
    ("BFS", 884, 11, 1514),
    ("DFS", 163_476, 88_951, 229_969),
    ("UCS", 884, 11, 1514),
    ("GBS (misplaced)", 104, 11, 182),
    ("GBS (manhattan)", 29, 11, 53),
    ("A* (misplaced)", 93, 11, 159),
    ("A* (manhattan)", 53, 11, 96),
];

#[test]
fn eleven_move_golden_counts() {
    let lineup = comparison_lineup();
    assert_eq!(lineup.len(), ELEVEN_MOVE_GOLDEN.len());
    let expected = lineup.into_iter().zip(ELEVEN_MOVE_GOLDEN);
    for (selection, (label, expanded, depth, trace_len)) in expected {
        assert_eq!(selection.label(), label);
        let record = run(&ELEVEN_MOVES, selection);
        assert!(record.is_goal_reached(), "{label}");
        assert_eq!(record.nodes_expanded, expanded, "{label} nodes_expanded");
        assert_eq!(record.depth, depth, "{label} depth");
        assert_eq!(record.trace.len(), trace_len, "{label} trace length");
    }
}

#[test]
fn three_move_golden_counts() {
    let bfs = run(&THREE_MOVES, RunSelection::new(Strategy::BreadthFirst, None));
    assert_eq!(bfs.nodes_expanded, 10);
    assert_eq!(bfs.trace.len(), 22);

    let dfs = run(&THREE_MOVES, RunSelection::new(Strategy::DepthFirst, None));
    assert_eq!(dfs.nodes_expanded, 438);
    assert_eq!(dfs.depth, 431);

    for kind in HeuristicKind::ALL {
        let astar = run(&THREE_MOVES, RunSelection::new(Strategy::AStar, Some(kind)));
        assert_eq!(astar.nodes_expanded, 3, "{kind}");
        assert_eq!(astar.trace.len(), 7, "{kind}");
    }
}
