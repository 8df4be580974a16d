//! Error types for board operations
//!
//! Lookups off the board are not errors (they return `None`). These variants
//! cover the operations that require an on-board square or fresh move sets.

use thiserror::Error;

use crate::types::{Coord, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Placement or removal targeted a coordinate outside the grid
    #[error("Coordinate {coord} is off the board (files a-h, ranks 1-8)")]
    OutOfRange { coord: Coord },

    /// A cached move set was read after the board changed underneath it
    #[error(
        "Move set for {square} is stale: built at generation {built_at}, board is at {current}"
    )]
    StaleMoveSet {
        square: Square,
        built_at: u64,
        current: u64,
    },

    /// A move was validated before any move set was built for the piece
    #[error("No move set has been built for the piece on {square}")]
    MissingMoveSet { square: Square },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
