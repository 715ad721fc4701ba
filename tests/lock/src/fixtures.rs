//! Named puzzles with pinned search outcomes.
//!
//! Every start is measured against the solved board (blank top-left).
//! Expansion counts asserted elsewhere depend on the successor order
//! `Up, Down, Left, Right` and insertion-order tie-breaking.

use tessera_kernel::carrier::board::Board;
use tessera_harness::worlds::sliding_tile::SlidingTileProblem;

/// Already solved.
pub const SOLVED: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// One `Up` from the goal: the first successor BFS enqueues is the goal.
pub const ONE_MOVE: [u8; 9] = [3, 1, 2, 0, 4, 5, 6, 7, 8];

/// One `Left` from the goal, but `Down` is enqueued first.
pub const ONE_MOVE_LEFT: [u8; 9] = [1, 0, 2, 3, 4, 5, 6, 7, 8];

/// Unique shortest solution `Up, Left, Left`.
pub const THREE_MOVES: [u8; 9] = [1, 2, 5, 3, 4, 0, 6, 7, 8];

/// Optimal solution length 11.
pub const ELEVEN_MOVES: [u8; 9] = [5, 1, 2, 3, 4, 0, 6, 7, 8];

/// Blank and tile 4 transposed across the diagonal: opposite parity class.
pub const UNSOLVABLE_3X3: [u8; 9] = [4, 1, 2, 3, 0, 5, 6, 7, 8];

/// Tiles 1 and 2 transposed on a 2x2 board.
pub const UNSOLVABLE_2X2: [u8; 4] = [0, 2, 1, 3];

/// Reachable states of a 3x3 parity class (9! / 2).
pub const COMPONENT_3X3: u64 = 181_440;

/// Reachable states of a 2x2 parity class (4! / 2).
pub const COMPONENT_2X2: u64 = 12;

/// Board from row-major tiles.
///
/// # Panics
///
/// Panics if `tiles` is not a valid board. Fixtures are static, so this is
/// a test-only invariant.
#[must_use]
pub fn board(tiles: &[u8]) -> Board {
    Board::from_tiles(tiles).unwrap()
}

/// Problem from `start` to the solved board of the same side.
///
/// # Panics
///
/// Panics if `start` is not a valid board.
#[must_use]
pub fn problem(start: &[u8]) -> SlidingTileProblem {
    SlidingTileProblem::with_solved_goal(board(start)).unwrap()
}
