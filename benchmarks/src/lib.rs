//! Shared helpers for tessera benchmark suites.

#![forbid(unsafe_code)]

use tessera_harness::policy::{RunPolicyConfig, RunSelection};
use tessera_harness::runner::{run_search, RunRecord};
use tessera_harness::worlds::sliding_tile::SlidingTileProblem;
use tessera_kernel::carrier::board::Board;

/// A named start board and its goal.
#[derive(Debug, Clone, Copy)]
pub struct BenchPuzzle {
    pub name: &'static str,
    pub start: &'static [u8],
    /// Goal board; `None` is the solved board.
    pub goal: Option<&'static [u8]>,
    /// Optimal solution length.
    pub optimal_depth: usize,
}

/// Benchmark puzzles in increasing difficulty.
pub const PUZZLES: [BenchPuzzle; 3] = [
    BenchPuzzle {
        name: "three_moves",
        start: &[1, 2, 5, 3, 4, 0, 6, 7, 8],
        goal: None,
        optimal_depth: 3,
    },
    BenchPuzzle {
        name: "eleven_moves",
        start: &[5, 1, 2, 3, 4, 0, 6, 7, 8],
        goal: None,
        optimal_depth: 11,
    },
    BenchPuzzle {
        name: "twenty_two_moves",
        start: &[0, 1, 2, 3, 4, 5, 6, 7, 8],
        goal: Some(&[1, 2, 3, 4, 5, 6, 7, 8, 0]),
        optimal_depth: 22,
    },
];

impl BenchPuzzle {
    /// Build the problem.
    ///
    /// # Panics
    ///
    /// Panics if the board is invalid. Benchmark setup failures are fatal.
    #[must_use]
    pub fn problem(&self) -> SlidingTileProblem {
        let start = Board::from_tiles(self.start).expect("valid benchmark board");
        match self.goal {
            Some(goal) => {
                let goal = Board::from_tiles(goal).expect("valid benchmark goal");
                SlidingTileProblem::new(start, goal).expect("matching sides")
            }
            None => SlidingTileProblem::with_solved_goal(start).expect("valid benchmark problem"),
        }
    }
}

/// Run one selection and check it solved the puzzle.
///
/// # Panics
///
/// Panics if the run fails or does not reach the goal.
#[must_use]
pub fn run_checked(problem: &SlidingTileProblem, selection: RunSelection) -> RunRecord {
    let record = run_search(problem, selection, &RunPolicyConfig::default())
        .expect("benchmark run failed");
    assert!(
        record.is_goal_reached(),
        "{} did not reach the goal",
        selection.label()
    );
    record
}
