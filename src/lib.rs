//! Falling-block stacking simulator.
//!
//! Pieces from a fixed seven-shape catalog are dropped into named columns of
//! a bit-packed grid; completed rows are cleared and the stack height is
//! reported after each processed input line. The binary in `main.rs` wires
//! this core to stdin/stdout.

pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{Game, Grid, Piece};
pub use error::GameError;
pub use types::PieceKind;
