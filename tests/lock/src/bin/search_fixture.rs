//! Binary that runs the full comparison line-up (plus A* with the null
//! heuristic) on the eleven-move fixture and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `key=value` line per field, grouped per run.

use lock_tests::fixtures::{problem, ELEVEN_MOVES};
use tessera_harness::policy::{comparison_lineup, RunPolicyConfig, RunSelection};
use tessera_harness::runner::run_search;
use tessera_kernel::proof::hash::board_fingerprint;
use tessera_search::policy::Strategy;

fn main() {
    let problem = problem(&ELEVEN_MOVES);
    let config = RunPolicyConfig::default();

    let mut lineup = comparison_lineup();
    lineup.push(RunSelection::new(Strategy::AStar, None));

    println!("start_fingerprint={}", board_fingerprint(problem.start()));
    println!("goal_fingerprint={}", board_fingerprint(problem.goal()));

    for selection in lineup {
        let record = run_search(&problem, selection, &config).expect("search run failed");
        let record_digest = record.record_digest().expect("record digest failed");
        let actions: Vec<&str> = record.actions.iter().map(|mv| mv.name()).collect();

        println!("run={}", selection.label());
        println!("termination_reason={}", record.termination);
        println!("path_cost={}", record.path_cost);
        println!("depth={}", record.depth);
        println!("nodes_expanded={}", record.nodes_expanded);
        println!("trace_len={}", record.trace.len());
        if record.depth <= 16 {
            println!("actions={}", actions.join(","));
        }
        println!("trace_digest={}", record.trace_digest);
        println!("policy_digest={}", record.policy_digest);
        println!("record_digest={record_digest}");
    }
}
