//! Error taxonomy for the simulation core.
//!
//! All failures here are deterministic parse/lookup/configuration errors;
//! none are transient, so there is no retry machinery.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Token references a piece letter absent from the catalog.
    #[error("unknown piece letter: {0:?}")]
    UnknownPiece(char),
    /// Token is empty or its column suffix is not a non-negative integer.
    #[error("malformed token: {0:?}")]
    MalformedToken(String),
    /// Grid dimensions outside the supported range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
