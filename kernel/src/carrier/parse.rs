//! Textual board input.
//!
//! Accepts the command-line notation `[[1,2,3],[8,-,4],[7,6,5]]`: nested or
//! flat bracketed lists, `-` or `0` for the blank, commas and whitespace as
//! separators. Rows are flattened row-major; the side is inferred from the
//! tile count.

use crate::carrier::board::{Board, BoardError, BLANK};

/// Parse a board from its textual notation.
///
/// # Errors
///
/// Returns [`BoardError::Parse`] for unbalanced brackets or tokens that are
/// neither a tile number nor a blank marker, and any validation error from
/// [`Board::from_tiles`].
pub fn parse_board(input: &str) -> Result<Board, BoardError> {
    let mut depth = 0i32;
    let mut tiles = Vec::new();
    let mut token = String::new();

    for ch in input.chars() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(BoardError::Parse {
                        detail: "unmatched ']'".into(),
                    });
                }
            }
            c if c == ',' || c.is_whitespace() => {}
            c => {
                token.push(c);
                continue;
            }
        }
        flush_token(&mut token, &mut tiles)?;
    }
    flush_token(&mut token, &mut tiles)?;

    if depth != 0 {
        return Err(BoardError::Parse {
            detail: "unmatched '['".into(),
        });
    }
    if tiles.is_empty() {
        return Err(BoardError::Parse {
            detail: "no tiles".into(),
        });
    }

    Board::from_tiles(&tiles)
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

fn flush_token(token: &mut String, tiles: &mut Vec<u8>) -> Result<(), BoardError> {
    if token.is_empty() {
        return Ok(());
    }
    let tile = match token.as_str() {
        "-" | "_" => BLANK,
        digits => digits.parse::<u8>().map_err(|_| BoardError::Parse {
            detail: format!("invalid tile token {digits:?}"),
        })?,
    };
    tiles.push(tile);
    token.clear();
    Ok(())
}
