//! Command-line arguments for the `tessera` binary.

use std::path::PathBuf;

use clap::Parser;

use tessera_kernel::carrier::board::{Board, BoardError};
use tessera_search::policy::Strategy;

use crate::heuristics::HeuristicKind;
use crate::policy::{RunPolicyConfig, RunSelection};
use crate::worlds::sliding_tile::SlidingTileProblem;

/// Solve a sliding-tile puzzle with uninformed and informed search
///
/// Runs the selected strategy, writes its report, then runs the rest of the
/// comparison line-up and appends a comparison table to `output.txt`.
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Strategy: bfs, dfs, ucs, gbfs, astar
    #[arg(long = "search", value_name = "STRATEGY")]
    pub strategy: Strategy,

    /// Heuristic for gbfs and astar: misplaced, manhattan
    #[arg(long)]
    pub heuristic: Option<HeuristicKind>,

    /// Start board, e.g. "[[1,2,3],[8,-,4],[7,6,5]]"
    #[arg(long, value_name = "BOARD")]
    pub initial: Board,

    /// Goal board (defaults to the solved board, blank top-left)
    #[arg(long, value_name = "BOARD")]
    pub goal: Option<Board>,

    /// Directory for report files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Stop each search after this many expansions
    #[arg(long)]
    pub max_expansions: Option<u64>,

    /// Skip the comparison line-up
    #[arg(long)]
    pub no_compare: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    #[must_use]
    pub fn selection(&self) -> RunSelection {
        RunSelection::new(self.strategy, self.heuristic)
    }

    #[must_use]
    pub fn policy_config(&self) -> RunPolicyConfig {
        RunPolicyConfig {
            max_expansions: self.max_expansions,
        }
    }

    /// Build the problem from `--initial` and `--goal`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SideMismatch`] if the boards differ in size.
    pub fn problem(&self) -> Result<SlidingTileProblem, BoardError> {
        match &self.goal {
            Some(goal) => SlidingTileProblem::new(self.initial.clone(), goal.clone()),
            None => SlidingTileProblem::with_solved_goal(self.initial.clone()),
        }
    }
}
