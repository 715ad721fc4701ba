//! Sliding-tile puzzle as a search problem.
//!
//! States are [`Board`]s, actions are blank [`Move`]s, and every move costs
//! [`STEP_COST`]. Successors are enumerated in `Up, Down, Left, Right` order,
//! which is what makes DFS and tie-breaking reproducible.

use tessera_kernel::carrier::board::{Board, BoardError};
use tessera_kernel::carrier::moves::{Move, MoveError};
use tessera_search::contract::{SearchProblem, Successor};

/// Cost of a single blank move.
pub const STEP_COST: i64 = 1;

/// A start arrangement and the arrangement to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingTileProblem {
    start: Board,
    goal: Board,
    /// `(row, col)` of each tile in `goal`, indexed by tile number.
    goal_cells: Vec<(usize, usize)>,
}

impl SlidingTileProblem {
    /// Pair `start` with `goal`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SideMismatch`] if the boards differ in size.
    pub fn new(start: Board, goal: Board) -> Result<Self, BoardError> {
        if start.side() != goal.side() {
            return Err(BoardError::SideMismatch {
                left: start.side(),
                right: goal.side(),
            });
        }
        Ok(Self::assemble(start, goal))
    }

    /// Pair `start` with the solved board of the same side (blank top-left).
    ///
    /// # Errors
    ///
    /// Propagates [`Board::solved`] failures.
    pub fn with_solved_goal(start: Board) -> Result<Self, BoardError> {
        let goal = Board::solved(start.side())?;
        Ok(Self::assemble(start, goal))
    }

    fn assemble(start: Board, goal: Board) -> Self {
        let side = goal.side();
        let mut goal_cells = vec![(0, 0); goal.tiles().len()];
        for (idx, &tile) in goal.tiles().iter().enumerate() {
            goal_cells[usize::from(tile)] = (idx / side, idx % side);
        }
        Self {
            start,
            goal,
            goal_cells,
        }
    }

    #[must_use]
    pub fn start(&self) -> &Board {
        &self.start
    }

    #[must_use]
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Goal `(row, col)` of every tile, indexed by tile number.
    #[must_use]
    pub fn goal_cells(&self) -> &[(usize, usize)] {
        &self.goal_cells
    }

    /// Whether the goal lies in the start's reachable component.
    ///
    /// An unsolvable problem is still searchable; the search simply
    /// exhausts the component.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.start.same_parity_class(&self.goal)
    }
}

impl SearchProblem for SlidingTileProblem {
    type State = Board;
    type Action = Move;
    type Error = MoveError;

    fn start_state(&self) -> Board {
        self.start.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Board) -> Result<Vec<Successor<Board, Move>>, MoveError> {
        state
            .legal_moves()
            .into_iter()
            .map(|mv| Ok(Successor::new(state.apply(mv)?, mv, STEP_COST)))
            .collect()
    }

    /// Replays `actions` from the start board; an illegal move is an error.
    fn cost_of_actions(&self, actions: &[Move]) -> Result<i64, MoveError> {
        let mut board = self.start.clone();
        let mut cost = 0i64;
        for &mv in actions {
            board = board.apply(mv)?;
            cost += STEP_COST;
        }
        Ok(cost)
    }
}
