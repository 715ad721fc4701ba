//! Sliding-tile heuristics.
//!
//! Both estimates are measured against the problem's goal board, not a
//! fixed arrangement, and both ignore the blank. They never overestimate
//! the number of remaining moves.

use tessera_kernel::carrier::board::{Board, BLANK};
use tessera_search::heuristic::Heuristic;

use crate::worlds::sliding_tile::SlidingTileProblem;

/// Number of non-blank tiles not on their goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl Heuristic<SlidingTileProblem> for MisplacedTiles {
    fn name(&self) -> &str {
        HeuristicKind::Misplaced.name()
    }

    fn estimate(&self, state: &Board, problem: &SlidingTileProblem) -> i64 {
        let misplaced = state
            .tiles()
            .iter()
            .zip(problem.goal().tiles())
            .filter(|(&tile, &target)| tile != BLANK && tile != target)
            .count();
        i64::try_from(misplaced).unwrap_or(i64::MAX)
    }
}

/// Sum over non-blank tiles of the Manhattan distance to the goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic<SlidingTileProblem> for ManhattanDistance {
    fn name(&self) -> &str {
        HeuristicKind::Manhattan.name()
    }

    fn estimate(&self, state: &Board, problem: &SlidingTileProblem) -> i64 {
        let side = state.side();
        let goal_cells = problem.goal_cells();

        let distance: usize = state
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, &tile)| tile != BLANK)
            .map(|(idx, &tile)| {
                let (row, col) = goal_cells[usize::from(tile)];
                (idx / side).abs_diff(row) + (idx % side).abs_diff(col)
            })
            .sum();
        i64::try_from(distance).unwrap_or(i64::MAX)
    }
}

/// Selectable heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Misplaced,
    Manhattan,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 2] = [HeuristicKind::Misplaced, HeuristicKind::Manhattan];

    /// Name used on the command line, in reports and in file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Misplaced => "misplaced",
            Self::Manhattan => "manhattan",
        }
    }

    /// The heuristic implementation.
    #[must_use]
    pub fn heuristic(self) -> &'static dyn Heuristic<SlidingTileProblem> {
        match self {
            Self::Misplaced => &MisplacedTiles,
            Self::Manhattan => &ManhattanDistance,
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicError {
    pub name: String,
}

impl std::fmt::Display for ParseHeuristicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown heuristic {:?} (expected \"misplaced\" or \"manhattan\")",
            self.name
        )
    }
}

impl std::error::Error for ParseHeuristicError {}

impl std::str::FromStr for HeuristicKind {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "misplaced" | "misplaced_tiles" | "hamming" => Ok(Self::Misplaced),
            "manhattan" | "manhattan_distance" => Ok(Self::Manhattan),
            _ => Err(ParseHeuristicError {
                name: s.to_string(),
            }),
        }
    }
}
