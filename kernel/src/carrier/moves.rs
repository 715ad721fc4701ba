//! Blank-tile moves.
//!
//! A move names the direction the blank travels. `Up` swaps the blank with
//! the tile above it, and so on.

/// Direction of travel of the blank.
///
/// Declaration order is the enumeration order used by
/// [`Board::legal_moves`](crate::carrier::board::Board::legal_moves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in enumeration order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Stable lower-case name (`"up"`, `"down"`, `"left"`, `"right"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Row and column offset applied to the blank position.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MoveError::UnknownMove {
                name: s.to_string(),
            })
    }
}

/// Typed failure for applying a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The blank cannot travel in this direction from its current position.
    IllegalMove {
        mv: Move,
        blank_row: usize,
        blank_col: usize,
    },
    /// A move name did not match any direction.
    UnknownMove { name: String },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalMove {
                mv,
                blank_row,
                blank_col,
            } => write!(
                f,
                "illegal move: blank at ({blank_row}, {blank_col}) cannot move {mv}"
            ),
            Self::UnknownMove { name } => write!(f, "unknown move: {name:?}"),
        }
    }
}

impl std::error::Error for MoveError {}
