//! Grid module - the bit-packed playing field
//!
//! One u32 mask per row, bit `k` set means column `k` is occupied.
//! Row 0 is the topmost row. Invariant: no row has bits set at or beyond
//! index `width`. The row count never changes; line clearing compacts the
//! surviving rows downward and refills the top with empty rows.

use log::{debug, log_enabled, Level};

use crate::error::GameError;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_WIDTH};

/// The playing field - `height` bit-packed rows of `width` columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    rows: Vec<u32>,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// Dimensions are validated, never clamped: zero width/height or a width
    /// beyond the row mask capacity is a configuration error.
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if width > MAX_WIDTH {
            return Err(GameError::InvalidConfig(format!(
                "grid width {} exceeds the maximum of {}",
                width, MAX_WIDTH
            )));
        }
        Ok(Self {
            width,
            height,
            rows: vec![0; height as usize],
        })
    }

    /// Create the standard 10x100 grid.
    pub fn with_defaults() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rows: vec![0; DEFAULT_HEIGHT as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mask of a completely filled row
    pub fn full_row_mask(&self) -> u32 {
        ((1u64 << self.width) - 1) as u32
    }

    /// Bitmask of row `y` (row 0 is the top)
    pub fn row(&self, y: usize) -> u32 {
        self.rows[y]
    }

    /// Check if column `x` of row `y` is occupied
    pub fn is_occupied(&self, x: u32, y: usize) -> bool {
        self.rows[y] & (1 << x) != 0
    }

    /// Overwrite row `y` with the given mask (test setup hook)
    pub fn set_row(&mut self, y: usize, mask: u32) {
        debug_assert_eq!(mask & !self.full_row_mask(), 0);
        self.rows[y] = mask;
    }

    /// OR a mask into row `y`
    pub(crate) fn or_row(&mut self, y: usize, mask: u32) {
        debug_assert_eq!(mask & !self.full_row_mask(), 0);
        self.rows[y] |= mask;
    }

    /// Clear all full rows, refill the top with empty rows, and return the
    /// number of rows cleared.
    ///
    /// Uses a two-pointer compaction: surviving rows are copied down in one
    /// bottom-to-top pass, then the vacated top rows are zeroed. Relative
    /// order of the surviving rows is preserved and the row count is
    /// unchanged.
    pub fn clear_full_rows(&mut self) -> usize {
        let full = self.full_row_mask();
        let mut write = self.rows.len();

        for read in (0..self.rows.len()).rev() {
            if self.rows[read] != full {
                write -= 1;
                if write != read {
                    self.rows[write] = self.rows[read];
                }
            }
        }

        let cleared = write;
        for row in &mut self.rows[..write] {
            *row = 0;
        }
        cleared
    }

    /// Height of the stack: distance from the floor to the topmost occupied
    /// row. Rows below the top of the stack need not be full. Returns 0 for
    /// an empty grid.
    pub fn stack_height(&self) -> u32 {
        for (i, &row) in self.rows.iter().enumerate() {
            if row != 0 {
                return self.height - i as u32;
            }
        }
        0
    }

    /// Emit the grid state to the debug log, one row per line.
    ///
    /// Incidental instrumentation only; skipped entirely unless debug
    /// logging is enabled.
    pub fn log_snapshot(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!("current grid state:");
        for row in &self.rows {
            let line: String = (0..self.width)
                .map(|x| if row & (1 << x) != 0 { 'O' } else { ' ' })
                .collect();
            debug!("|{}|", line);
        }
    }
}
