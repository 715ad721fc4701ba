//! Behavioural lock tests for the search engine on sliding-tile puzzles.
//!
//! Scenarios pin concrete outcomes; the property section checks invariants
//! that hold for every strategy in the comparison line-up.

use lock_tests::fixtures::{
    board, problem, COMPONENT_2X2, COMPONENT_3X3, ELEVEN_MOVES, ONE_MOVE, ONE_MOVE_LEFT, SOLVED,
    THREE_MOVES, UNSOLVABLE_2X2, UNSOLVABLE_3X3,
};
use tessera_harness::heuristics::HeuristicKind;
use tessera_harness::policy::{comparison_lineup, RunPolicyConfig, RunSelection};
use tessera_harness::runner::run_search;
use tessera_harness::worlds::sliding_tile::SlidingTileProblem;
use tessera_kernel::carrier::moves::Move;
use tessera_search::contract::SearchProblem;
use tessera_search::heuristic::ZeroHeuristic;
use tessera_search::policy::{SearchPolicy, Strategy};
use tessera_search::search::{breadth_first, search, search_with_policy, uniform_cost};
use tessera_search::trace::{TerminationReason, TraceStep};

// --- One move from the goal ---

#[test]
fn bfs_one_move_first_successor_is_goal() {
    let p = problem(&ONE_MOVE);
    let result = breadth_first(&p).unwrap();
    assert_eq!(result.actions, vec![Move::Up]);
    assert_eq!(result.nodes_expanded, 1);
    assert_eq!(result.depth, 1);
    assert_eq!(result.path_cost, 1);
}

#[test]
fn bfs_one_move_goal_behind_earlier_sibling() {
    // Down is enqueued before Left, and the goal is only recognised when
    // popped, so the Down child is expanded first.
    let p = problem(&ONE_MOVE_LEFT);
    let result = breadth_first(&p).unwrap();
    assert_eq!(result.actions, vec![Move::Left]);
    assert_eq!(result.nodes_expanded, 2);
}

// --- Already at the goal ---

#[test]
fn solved_start_returns_empty_path_for_every_strategy() {
    let p = problem(&SOLVED);
    for selection in comparison_lineup() {
        let record = run_search(&p, selection, &RunPolicyConfig::default()).unwrap();
        assert!(record.actions.is_empty(), "{}", selection.label());
        assert_eq!(record.depth, 0);
        assert_eq!(record.path_cost, 0);
        assert_eq!(record.nodes_expanded, 0);
        assert_eq!(record.trace.len(), 1);
        assert_eq!(record.trace[0].step, TraceStep::GoalReached);
        assert_eq!(record.termination, TerminationReason::GoalReached);
    }
}

// --- Goal outside the reachable component ---

#[test]
fn unsolvable_2x2_exhausts_component_for_every_strategy() {
    let p = problem(&UNSOLVABLE_2X2);
    assert!(!p.is_solvable());
    for selection in comparison_lineup() {
        let record = run_search(&p, selection, &RunPolicyConfig::default()).unwrap();
        assert_eq!(
            record.termination,
            TerminationReason::FrontierExhausted,
            "{}",
            selection.label()
        );
        assert!(record.actions.is_empty());
        assert_eq!(record.nodes_expanded, COMPONENT_2X2, "{}", selection.label());
    }
}

#[test]
fn unsolvable_3x3_bfs_expands_half_the_permutations() {
    let p = problem(&UNSOLVABLE_3X3);
    assert!(!p.is_solvable());
    let result = breadth_first(&p).unwrap();
    assert_eq!(result.termination, TerminationReason::FrontierExhausted);
    assert!(result.actions.is_empty());
    assert_eq!(result.nodes_expanded, COMPONENT_3X3);
}

// --- A* with the null heuristic is uniform-cost search ---

#[test]
fn astar_zero_heuristic_matches_uniform_cost() {
    for start in [THREE_MOVES, ELEVEN_MOVES] {
        let p = problem(&start);
        let ucs = uniform_cost(&p).unwrap();
        let astar = search(&p, Strategy::AStar, Some(&ZeroHeuristic)).unwrap();
        assert_eq!(astar, ucs);
    }
}

#[test]
fn informed_strategy_without_heuristic_uses_null() {
    let p = problem(&THREE_MOVES);
    let implicit = search(&p, Strategy::AStar, None).unwrap();
    let explicit = search(&p, Strategy::AStar, Some(&ZeroHeuristic)).unwrap();
    assert_eq!(implicit, explicit);
}

// ---------------------------------------------------------------------------
// Properties over the comparison line-up
// ---------------------------------------------------------------------------

fn run_all(p: &SlidingTileProblem) -> Vec<tessera_harness::runner::RunRecord> {
    comparison_lineup()
        .into_iter()
        .map(|selection| run_search(p, selection, &RunPolicyConfig::default()).unwrap())
        .collect()
}

#[test]
fn returned_actions_replay_to_the_goal() {
    for start in [THREE_MOVES, ELEVEN_MOVES] {
        let p = problem(&start);
        for record in run_all(&p) {
            let mut state = p.start().clone();
            for &mv in &record.actions {
                state = state.apply(mv).unwrap();
            }
            assert!(p.is_goal(&state), "{}", record.selection.label());
            assert_eq!(
                p.cost_of_actions(&record.actions).unwrap(),
                record.path_cost
            );
            assert_eq!(record.depth, record.actions.len());
        }
    }
}

#[test]
fn optimal_strategies_find_shortest_solution() {
    let p = problem(&ELEVEN_MOVES);
    for record in run_all(&p) {
        let strategy = record.selection.strategy();
        match strategy {
            Strategy::BreadthFirst | Strategy::UniformCost | Strategy::AStar => {
                assert_eq!(record.path_cost, 11, "{}", record.selection.label());
            }
            Strategy::DepthFirst | Strategy::GreedyBestFirst => {
                assert!(record.path_cost >= 11, "{}", record.selection.label());
            }
        }
    }
}

#[test]
fn expansions_bounded_by_reachable_component() {
    let p = problem(&ELEVEN_MOVES);
    for record in run_all(&p) {
        assert!(record.nodes_expanded <= COMPONENT_3X3);
    }
}

#[test]
fn better_informed_heuristics_expand_fewer_nodes() {
    let p = problem(&ELEVEN_MOVES);
    let config = RunPolicyConfig::default();
    let expansions = |h: Option<HeuristicKind>| {
        run_search(&p, RunSelection::new(Strategy::AStar, h), &config)
            .unwrap()
            .nodes_expanded
    };
    let null = expansions(None);
    let misplaced = expansions(Some(HeuristicKind::Misplaced));
    let manhattan = expansions(Some(HeuristicKind::Manhattan));
    assert!(manhattan <= misplaced);
    assert!(misplaced <= null);
}

#[test]
fn trace_entries_are_legal_moves_ending_at_goal() {
    let p = problem(&THREE_MOVES);
    for record in run_all(&p) {
        let (last, rest) = record.trace.split_last().unwrap();
        assert_eq!(last.step, TraceStep::GoalReached);
        assert!(p.is_goal(&last.state));
        for entry in rest {
            let TraceStep::Action(mv) = entry.step else {
                panic!("GoalReached before the end of the trace");
            };
            assert!(entry.state.apply(mv).is_ok());
        }
    }
}

#[test]
fn expansion_budget_stops_search() {
    let p = problem(&ELEVEN_MOVES);
    let policy = SearchPolicy::new(Strategy::BreadthFirst).with_max_expansions(10);
    let result = search_with_policy(&p, &policy, None).unwrap();
    assert_eq!(
        result.termination,
        TerminationReason::ExpansionBudgetExceeded { max_expansions: 10 }
    );
    assert_eq!(result.nodes_expanded, 10);
    assert!(result.actions.is_empty());
}

#[test]
fn budget_of_one_still_returns_a_goal_popped_after_it() {
    let p = problem(&ONE_MOVE);
    for strategy in [
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ] {
        let policy = SearchPolicy::new(strategy).with_max_expansions(1);
        let result = search_with_policy(&p, &policy, None).unwrap();
        assert_eq!(result.termination, TerminationReason::GoalReached, "{strategy}");
        assert_eq!(result.actions, vec![Move::Up], "{strategy}");
        assert_eq!(result.nodes_expanded, 1, "{strategy}");
    }
}

#[test]
fn custom_goal_is_honoured() {
    let goal = board(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    let p = SlidingTileProblem::new(board(&SOLVED), goal.clone()).unwrap();
    assert!(p.is_solvable());
    let config = RunPolicyConfig::default();
    let manhattan = run_search(
        &p,
        RunSelection::new(Strategy::AStar, Some(HeuristicKind::Manhattan)),
        &config,
    )
    .unwrap();
    let misplaced = run_search(
        &p,
        RunSelection::new(Strategy::AStar, Some(HeuristicKind::Misplaced)),
        &config,
    )
    .unwrap();
    assert!(manhattan.is_goal_reached());
    assert_eq!(manhattan.path_cost, misplaced.path_cost);
    assert_eq!(manhattan.trace.last().unwrap().state, goal);
}
