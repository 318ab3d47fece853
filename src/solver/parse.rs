//! Grid string parsing and its inverse.

use crate::{
    error::{Error, Result},
    solver::{
        board::Board,
        candidates::{Candidates, Digit},
        topology::Cell,
    },
};

/// The character standing for an unknown cell in a grid string.
pub const PLACEHOLDER: char = '.';

/// Parses an 81-cell grid string into a board.
///
/// Digits `1`–`9` fix a cell to that value; [`PLACEHOLDER`] leaves all nine
/// candidates open. Every other character (line breaks, spaces, separators)
/// is skipped. Fails with [`Error::MalformedGrid`] unless exactly 81
/// meaningful characters remain — the only validation performed; duplicate
/// givens and solvability are the solver's problem, not the parser's.
pub fn grid_values(input: &str) -> Result<Board> {
    let mut entries = Vec::with_capacity(81);
    for ch in input.chars() {
        if let Some(digit) = Digit::from_char(ch) {
            entries.push(Candidates::only(digit));
        } else if ch == PLACEHOLDER {
            entries.push(Candidates::ALL);
        }
    }
    if entries.len() != 81 {
        return Err(Error::MalformedGrid {
            found: entries.len(),
        });
    }
    let board = Cell::all()
        .zip(entries)
        .fold(Board::blank(), |board, (cell, candidates)| {
            board.set(cell, candidates)
        });
    Ok(board)
}

/// Collapses a board back to the 81-character line form: solved cells as
/// their digit, anything undetermined as [`PLACEHOLDER`].
pub fn to_line(board: &Board) -> String {
    Cell::all()
        .map(|cell| {
            board
                .candidates(cell)
                .singleton()
                .map_or(PLACEHOLDER, Digit::to_char)
        })
        .collect()
}
