//! Core module - pure simulation logic with no external dependencies
//!
//! This module contains the piece catalog, the bit-packed grid, the
//! placement engine, and the session driver. It has zero dependencies on
//! I/O; the only side effect is optional debug logging through the `log`
//! facade.

pub mod engine;
pub mod game;
pub mod grid;
pub mod pieces;

// Re-export commonly used types
pub use game::Game;
pub use grid::Grid;
pub use pieces::Piece;
