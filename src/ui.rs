#![cfg(feature = "std")]

//! Text rendering of the grid and coordinate parsing for the terminal shell.

use std::fmt::Write;
use std::string::String;

use crate::grid::{CellState, Grid};

/// Column letters run `A..=Z`; wider grids fall back to numeric columns.
const LETTER_COLUMNS: usize = 26;

fn column_label(col: usize, side: usize) -> String {
    if side <= LETTER_COLUMNS {
        ((b'A' + col as u8) as char).to_string()
    } else {
        (col + 1).to_string()
    }
}

/// Human-readable label of `cell`, e.g. `B7`.
pub fn coord_label(cell: usize, side: usize) -> String {
    let (row, col) = (cell / side, cell % side);
    if side <= LETTER_COLUMNS {
        format!("{}{}", column_label(col, side), row + 1)
    } else {
        format!("{} {}", row + 1, col + 1)
    }
}

/// Parse `B7` (column letter, 1-based row) or `7 2` (1-based row and column)
/// into a cell id on a grid of `side`.
pub fn parse_coord(input: &str, side: usize) -> Option<usize> {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(r), Some(c), None) => (r.parse::<usize>().ok()?, c.parse::<usize>().ok()?),
        (Some(single), None, None) => {
            let mut chars = single.chars();
            let col_ch = chars.next()?.to_ascii_uppercase();
            if !col_ch.is_ascii_uppercase() {
                return None;
            }
            let col = (col_ch as u8 - b'A') as usize + 1;
            (chars.as_str().parse::<usize>().ok()?, col)
        }
        _ => return None,
    };
    if row == 0 || col == 0 || row > side || col > side {
        return None;
    }
    Some((row - 1) * side + (col - 1))
}

fn glyph(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Ship if reveal => 'S',
        CellState::Ship => '.',
        CellState::Miss => 'o',
        CellState::Hit => 'X',
        CellState::Destroyed => '#',
    }
}

/// Render `grid` with row and column labels. Intact ship cells are shown
/// only when `reveal` is set.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let side = grid.side();
    let mut out = String::new();
    let _ = write!(out, "   ");
    for c in 0..side {
        let _ = write!(out, " {:>2}", column_label(c, side));
    }
    let _ = writeln!(out);
    for (r, row) in grid.rows().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for &state in row {
            let _ = write!(out, "  {}", glyph(state, reveal));
        }
        let _ = writeln!(out);
    }
    out
}
