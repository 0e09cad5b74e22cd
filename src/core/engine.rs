//! Placement engine - collision checks, gravity drop, and grid writes
//!
//! Pieces enter at the top of the grid and fall until blocked. All collision
//! work is bitwise: a piece row shifted left by the target column lines up
//! with the grid row it would occupy.

use log::debug;

use super::grid::Grid;
use super::pieces::Piece;

/// Check whether `piece` fits with its top-left corner at (`row`, `column`).
///
/// Rejects horizontal out-of-bounds positions, any piece row falling outside
/// the grid, and any overlap with occupied cells. Every row of the piece's
/// footprint is checked; a piece can be blocked by any part of its body, not
/// only its lowest cells.
pub fn can_place(grid: &Grid, piece: &Piece, row: i32, column: i32) -> bool {
    if column < 0 || column + piece.width() as i32 > grid.width() as i32 {
        return false;
    }
    for (i, &bits) in piece.rows().iter().enumerate() {
        let grid_row = row + i as i32;
        if grid_row < 0 || grid_row >= grid.height() as i32 {
            return false;
        }
        if grid.row(grid_row as usize) & (bits << column) != 0 {
            return false;
        }
    }
    true
}

/// Write `piece` into the grid at (`row`, `column`) with no re-validation.
///
/// Callers must only invoke this after `can_place` succeeded at the exact
/// same position.
pub fn add_to_grid(grid: &mut Grid, piece: &Piece, row: u32, column: u32) {
    for (i, &bits) in piece.rows().iter().enumerate() {
        grid.or_row(row as usize + i, bits << column);
    }
}

/// Drop `piece` into `column` and return the settle row, if any.
///
/// Gravity drop: scan downward from the top, keep falling while the position
/// stays valid, and settle at the last valid row before the first blocked
/// one. If no row admits the piece at all (over-wide piece, out-of-range
/// column, or a piece taller than the grid), the grid is left untouched.
pub fn place(grid: &mut Grid, piece: &Piece, column: i32) -> Option<u32> {
    let mut settle = None;
    let mut row = 0i32;
    while can_place(grid, piece, row, column) {
        settle = Some(row as u32);
        row += 1;
    }

    if let Some(row) = settle {
        add_to_grid(grid, piece, row, column as u32);
        debug!(
            "placed piece {} at row {}, column {}",
            piece.kind().as_char(),
            row,
            column
        );
        grid.log_snapshot();
    } else {
        debug!(
            "no valid position for piece {} in column {}",
            piece.kind().as_char(),
            column
        );
    }
    settle
}
