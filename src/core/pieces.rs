//! Pieces module - the fixed catalog of block shapes
//!
//! Each piece is static data: its identity, its rows as bitmasks (top row
//! first), and its bounding-box width. Bit `j` of a row mask is column `j`
//! of the bounding box, counted from the left edge. The catalog is const
//! and shared read-only across all sessions.

use crate::error::GameError;
use crate::types::PieceKind;

/// An immutable block shape from the catalog
#[derive(Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rows: &'static [u32],
    width: u32,
}

impl Piece {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Row bitmasks, top row first
    pub fn rows(&self) -> &'static [u32] {
        self.rows
    }

    /// Bounding-box width in columns
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bounding-box height in rows
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }
}

// Shapes, drawn with bit 0 (the left column) first:
//
//   Q: ##    Z: ##.   S: .##   T: ###   I: ####   L: #.   J: .#
//      ##       .##      ##.      .#.                #.      .#
//                                                    #.      .#
//                                                    ##      ##
const CATALOG: [Piece; 7] = [
    Piece { kind: PieceKind::Q, rows: &[0b11, 0b11], width: 2 },
    Piece { kind: PieceKind::Z, rows: &[0b011, 0b110], width: 3 },
    Piece { kind: PieceKind::S, rows: &[0b110, 0b011], width: 3 },
    Piece { kind: PieceKind::T, rows: &[0b111, 0b010], width: 3 },
    Piece { kind: PieceKind::I, rows: &[0b1111], width: 4 },
    Piece { kind: PieceKind::L, rows: &[0b01, 0b01, 0b01, 0b11], width: 2 },
    Piece { kind: PieceKind::J, rows: &[0b10, 0b10, 0b10, 0b11], width: 2 },
];

/// Get the shape for a piece kind
pub fn get(kind: PieceKind) -> &'static Piece {
    match kind {
        PieceKind::Q => &CATALOG[0],
        PieceKind::Z => &CATALOG[1],
        PieceKind::S => &CATALOG[2],
        PieceKind::T => &CATALOG[3],
        PieceKind::I => &CATALOG[4],
        PieceKind::L => &CATALOG[5],
        PieceKind::J => &CATALOG[6],
    }
}

/// Look up a piece by its input letter
pub fn lookup(letter: char) -> Result<&'static Piece, GameError> {
    PieceKind::from_char(letter)
        .map(get)
        .ok_or(GameError::UnknownPiece(letter))
}
