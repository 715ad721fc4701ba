//! `Board`: the sliding-tile puzzle state.
//!
//! # Layout
//!
//! A square grid of `side * side` cells stored row-major. Every value in
//! `0..side*side` appears exactly once; `0` is the blank.
//!
//! ```text
//! [0, 1, 2, 3, 4, 5, 6, 7, 8]      -------------
//!                                  |   | 1 | 2 |
//!                                  -------------
//!                                  | 3 | 4 | 5 |
//!                                  -------------
//!                                  | 6 | 7 | 8 |
//!                                  -------------
//! ```
//!
//! # Equality semantics
//!
//! Equality, hashing and ordering are structural over `(side, tiles)`. Two
//! boards with the same arrangement are the same search state regardless of
//! how they were reached.

use crate::carrier::moves::{Move, MoveError};

/// The blank tile value.
pub const BLANK: u8 = 0;

/// Smallest supported grid side.
pub const MIN_SIDE: usize = 2;

/// Largest supported grid side (the 15-puzzle).
pub const MAX_SIDE: usize = 4;

/// Typed failure for board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Side outside `MIN_SIDE..=MAX_SIDE`.
    UnsupportedSide { side: usize },
    /// Tile count does not match `side * side`.
    TileCountMismatch { expected: usize, actual: usize },
    /// Tile count is not a perfect square of a supported side.
    NotSquare { len: usize },
    /// A tile value is `>= side * side`.
    TileOutOfRange { tile: u8, max: u8 },
    /// A tile value appears more than once.
    DuplicateTile { tile: u8 },
    /// Two boards that must share a side do not.
    SideMismatch { left: usize, right: usize },
    /// Textual board could not be parsed.
    Parse { detail: String },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedSide { side } => write!(
                f,
                "unsupported board side {side} (expected {MIN_SIDE}..={MAX_SIDE})"
            ),
            Self::TileCountMismatch { expected, actual } => {
                write!(f, "expected {expected} tiles, got {actual}")
            }
            Self::NotSquare { len } => write!(f, "{len} tiles do not form a supported square"),
            Self::TileOutOfRange { tile, max } => {
                write!(f, "tile {tile} out of range (max {max})")
            }
            Self::DuplicateTile { tile } => write!(f, "tile {tile} appears more than once"),
            Self::SideMismatch { left, right } => {
                write!(f, "board sides differ: {left} vs {right}")
            }
            Self::Parse { detail } => write!(f, "board parse error: {detail}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Immutable sliding-tile arrangement.
///
/// Construct via [`Board::new`], [`Board::from_tiles`] or [`Board::solved`];
/// all constructors validate the permutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    side: usize,
    tiles: Vec<u8>,
    /// Row-major index of the blank (cached; derived from `tiles`).
    blank: usize,
}

impl Board {
    /// Build a board of the given side from row-major tiles.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the side is unsupported or `tiles` is not a
    /// permutation of `0..side*side`.
    pub fn new(side: usize, tiles: Vec<u8>) -> Result<Self, BoardError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(BoardError::UnsupportedSide { side });
        }
        let cells = side * side;
        if tiles.len() != cells {
            return Err(BoardError::TileCountMismatch {
                expected: cells,
                actual: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let idx = usize::from(tile);
            if idx >= cells {
                return Err(BoardError::TileOutOfRange {
                    tile,
                    max: u8::try_from(cells - 1).unwrap_or(u8::MAX),
                });
            }
            if seen[idx] {
                return Err(BoardError::DuplicateTile { tile });
            }
            seen[idx] = true;
        }

        // Permutation check above guarantees exactly one blank.
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or(0);
        Ok(Self { side, tiles, blank })
    }

    /// Build a board, inferring the side from the tile count.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSquare`] if the length is not the square of a
    /// supported side, or any error from [`Board::new`].
    pub fn from_tiles(tiles: &[u8]) -> Result<Self, BoardError> {
        let side = (MIN_SIDE..=MAX_SIDE)
            .find(|s| s * s == tiles.len())
            .ok_or(BoardError::NotSquare { len: tiles.len() })?;
        Self::new(side, tiles.to_vec())
    }

    /// The solved arrangement `[0, 1, .., side*side - 1]` (blank top-left).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedSide`] for sides outside the range.
    pub fn solved(side: usize) -> Result<Self, BoardError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(BoardError::UnsupportedSide { side });
        }
        let tiles = (0..side * side)
            .map(|t| u8::try_from(t).unwrap_or(u8::MAX))
            .collect();
        Self::new(side, tiles)
    }

    /// Grid side length.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Row-major tiles.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub const fn blank(&self) -> (usize, usize) {
        (self.blank / self.side, self.blank % self.side)
    }

    /// Tile at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.tiles.get(row * self.side + col).copied()
    }

    /// `(row, col)` of a tile, or `None` if the tile is not on this board.
    #[must_use]
    pub fn position_of(&self, tile: u8) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|idx| (idx / self.side, idx % self.side))
    }

    /// Rows as nested vectors (`[[0, 1, 2], [3, 4, 5], [6, 7, 8]]`).
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.tiles.chunks(self.side).map(<[u8]>::to_vec).collect()
    }

    /// Blank moves available from this arrangement, in `Up, Down, Left, Right`
    /// order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.target_of(mv).is_some())
            .collect()
    }

    /// Apply a move, returning the new arrangement. `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the blank would leave the grid.
    pub fn apply(&self, mv: Move) -> Result<Self, MoveError> {
        let (blank_row, blank_col) = self.blank();
        let target = self.target_of(mv).ok_or(MoveError::IllegalMove {
            mv,
            blank_row,
            blank_col,
        })?;

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Ok(Self {
            side: self.side,
            tiles,
            blank: target,
        })
    }

    /// Whether `other` is reachable from `self` by legal moves.
    ///
    /// Every move is one transposition and shifts the blank by one cell, so
    /// the parity of the permutation between the two boards must equal the
    /// parity of the blank's Manhattan displacement. Boards of different
    /// sides are never in the same class.
    #[must_use]
    pub fn same_parity_class(&self, other: &Self) -> bool {
        if self.side != other.side {
            return false;
        }

        let mut where_in_other = vec![0usize; self.tiles.len()];
        for (idx, &tile) in other.tiles.iter().enumerate() {
            where_in_other[usize::from(tile)] = idx;
        }
        let perm: Vec<usize> = self
            .tiles
            .iter()
            .map(|&tile| where_in_other[usize::from(tile)])
            .collect();

        let mut visited = vec![false; perm.len()];
        let mut cycles = 0usize;
        for start in 0..perm.len() {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = perm[i];
            }
        }
        let perm_parity = (perm.len() - cycles) % 2;

        let (ra, ca) = self.blank();
        let (rb, cb) = other.blank();
        let blank_parity = (ra.abs_diff(rb) + ca.abs_diff(cb)) % 2;

        perm_parity == blank_parity
    }

    /// Bytes that identify this arrangement: `side || tiles`.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.tiles.len());
        out.push(u8::try_from(self.side).unwrap_or(u8::MAX));
        out.extend_from_slice(&self.tiles);
        out
    }

    fn target_of(&self, mv: Move) -> Option<usize> {
        let (row, col) = self.blank();
        let (dr, dc) = mv.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < self.side && col < self.side).then_some(row * self.side + col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        let rule = "-".repeat(self.side * (width + 3) + 1);

        let mut lines = vec![rule.clone()];
        for row in self.tiles.chunks(self.side) {
            let mut line = String::from("|");
            for &tile in row {
                if tile == BLANK {
                    line.push_str(&format!(" {:>width$} |", ""));
                } else {
                    line.push_str(&format!(" {tile:>width$} |"));
                }
            }
            lines.push(line);
            lines.push(rule.clone());
        }
        f.write_str(&lines.join("\n"))
    }
}
