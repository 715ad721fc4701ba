//! Strategy selection and search budget.

use crate::frontier::Discipline;

/// The five traversal configurations.
///
/// Each strategy pairs one frontier [`Discipline`] with one priority rule:
///
/// | strategy | discipline | priority of a pushed child |
/// |----------|------------|----------------------------|
/// | `BreadthFirst` | FIFO | - |
/// | `DepthFirst` | LIFO | - |
/// | `UniformCost` | priority | `g` |
/// | `GreedyBestFirst` | priority | `h` |
/// | `AStar` | priority | `g + h` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    GreedyBestFirst,
    AStar,
}

impl Strategy {
    /// All strategies in canonical order.
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ];

    /// Stable short name (`bfs`, `dfs`, `ucs`, `gbfs`, `astar`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::GreedyBestFirst => "gbfs",
            Self::AStar => "astar",
        }
    }

    /// Upper-case display label used in reports (`BFS`, .., `A*`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::UniformCost => "UCS",
            Self::GreedyBestFirst => "GBS",
            Self::AStar => "A*",
        }
    }

    /// Frontier discipline for this strategy.
    #[must_use]
    pub const fn discipline(self) -> Discipline {
        match self {
            Self::BreadthFirst => Discipline::Fifo,
            Self::DepthFirst => Discipline::Lifo,
            Self::UniformCost | Self::GreedyBestFirst | Self::AStar => Discipline::Priority,
        }
    }

    /// Whether the strategy consults a heuristic.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }

    /// Priority of a child with accumulated cost `g_cost` and estimate
    /// `h_cost`. Returns 0 for the FIFO/LIFO strategies, which ignore it.
    #[must_use]
    pub const fn priority(self, g_cost: i64, h_cost: i64) -> i64 {
        match self {
            Self::BreadthFirst | Self::DepthFirst => 0,
            Self::UniformCost => g_cost,
            Self::GreedyBestFirst => h_cost,
            Self::AStar => g_cost.saturating_add(h_cost),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to parse a strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    pub name: String,
}

impl std::fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown search strategy {:?} (expected one of bfs, dfs, ucs, gbfs, astar)",
            self.name
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl std::str::FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts the short names, the report labels, and the long
    /// snake-case names (`breadth_first`, .., `a_star`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let strategy = match lowered.as_str() {
            "bfs" | "breadth_first" => Self::BreadthFirst,
            "dfs" | "depth_first" => Self::DepthFirst,
            "ucs" | "uniform_cost" => Self::UniformCost,
            "gbfs" | "gbs" | "greedy" | "greedy_best_first" => Self::GreedyBestFirst,
            "astar" | "a*" | "a_star" => Self::AStar,
            _ => {
                return Err(ParseStrategyError {
                    name: s.to_string(),
                })
            }
        };
        Ok(strategy)
    }
}

/// Search configuration: strategy plus an optional expansion budget.
///
/// Without a budget the search runs to a goal or to frontier exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub strategy: Strategy,
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Unbounded policy for `strategy`.
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_expansions: None,
        }
    }

    /// Same policy with an expansion budget.
    #[must_use]
    pub const fn with_max_expansions(self, max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..self
        }
    }

    /// Whether `nodes_expanded` has used up the budget.
    #[must_use]
    pub fn budget_exhausted(&self, nodes_expanded: u64) -> bool {
        self.max_expansions
            .is_some_and(|max| nodes_expanded >= max)
    }
}

impl From<Strategy> for SearchPolicy {
    fn from(strategy: Strategy) -> Self {
        Self::new(strategy)
    }
}
