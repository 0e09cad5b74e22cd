//! Game module - session state and input line processing
//!
//! A [`Game`] owns one grid for its whole session. Each input line is a
//! comma-separated list of `<PieceLetter><Column>` tokens; each token drops
//! one piece and then clears any completed rows before the next token is
//! read. Clearing per piece (rather than per line) matters: a row completed
//! mid-line must be gone before later pieces on the same line fall.

use log::debug;

use super::engine;
use super::grid::Grid;
use super::pieces;
use crate::error::GameError;
use crate::types::PieceKind;

/// One simulation session: a grid plus the drive loop over input tokens
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
}

impl Game {
    /// Create a session with the given grid dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
        })
    }

    /// Create a session with the standard 10x100 grid.
    pub fn with_defaults() -> Self {
        Self {
            grid: Grid::with_defaults(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current stack height.
    pub fn stack_height(&self) -> u32 {
        self.grid.stack_height()
    }

    /// Process one input line and return the resulting stack height.
    ///
    /// Tokens are handled strictly in order with no rollback: if a later
    /// token fails to parse, pieces from earlier tokens on the same line
    /// have already been placed.
    pub fn process_input_line(&mut self, line: &str) -> Result<u32, GameError> {
        for token in line.split(',') {
            let (kind, column) = parse_token(token)?;
            let piece = pieces::get(kind);
            // A column with no valid settle row is deliberately a no-op.
            let _ = engine::place(&mut self.grid, piece, column);

            let cleared = self.grid.clear_full_rows();
            if cleared > 0 {
                debug!("cleared {} full row(s)", cleared);
                self.grid.log_snapshot();
            }
        }
        Ok(self.grid.stack_height())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Split a token into its piece letter and target column.
///
/// The letter must be a catalog piece; the remainder must be a plain decimal
/// integer (no sign, no whitespace) that fits the column type.
fn parse_token(token: &str) -> Result<(PieceKind, i32), GameError> {
    let mut chars = token.chars();
    let letter = chars
        .next()
        .ok_or_else(|| GameError::MalformedToken(token.to_string()))?;
    let kind = PieceKind::from_char(letter).ok_or(GameError::UnknownPiece(letter))?;

    let suffix = chars.as_str();
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::MalformedToken(token.to_string()));
    }
    let column = suffix
        .parse::<i32>()
        .map_err(|_| GameError::MalformedToken(token.to_string()))?;
    Ok((kind, column))
}
