//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default grid dimensions
pub const DEFAULT_WIDTH: u32 = 10;
pub const DEFAULT_HEIGHT: u32 = 100;

/// Rows are bit-packed into a u32, which caps the grid width.
pub const MAX_WIDTH: u32 = 32;

/// The seven block kinds, named by their input letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Q,
    Z,
    S,
    T,
    I,
    L,
    J,
}

impl PieceKind {
    /// Parse piece kind from its input letter (uppercase only)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'Q' => Some(PieceKind::Q),
            'Z' => Some(PieceKind::Z),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'I' => Some(PieceKind::I),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Convert to the input letter
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::Q => 'Q',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
        }
    }

    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Q,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
    ];
}
