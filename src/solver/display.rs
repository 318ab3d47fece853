//! Text rendering of a board, solved or mid-reduction.

use crate::solver::{board::Board, topology::Cell};

/// Renders the board as a 2-D grid.
///
/// Each cell prints its remaining candidates center-padded to a common
/// column width of one plus the longest candidate string on the board, with
/// vertical bars after columns 3 and 6 and a separator line after rows 3
/// and 6. A fully solved board therefore renders one digit per cell; a
/// partially reduced board shows the live candidate sets.
pub fn render(board: &Board) -> String {
    let width = 1 + Cell::all()
        .map(|cell| board.candidates(cell).len())
        .max()
        .unwrap_or(0);
    let separator = vec!["-".repeat(width * 3); 3].join("+");

    let mut out = String::new();
    for row in 0..9 {
        for col in 0..9 {
            let text = board.candidates(Cell::new(row, col)).to_string();
            out.push_str(&center(&text, width));
            if col == 2 || col == 5 {
                out.push('|');
            }
        }
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str(&separator);
            out.push('\n');
        }
    }
    out
}

// Pads like Python's str.center: the odd space goes to the right.
fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
