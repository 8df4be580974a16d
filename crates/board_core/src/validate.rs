//! Move validation against cached destination sets.

use serde::Serialize;

use crate::{
    board::Board,
    error::{BoardError, BoardResult},
    movegen::DestinationSet,
    types::Square,
};

/// Cached legal destinations for one piece, stamped with the board
/// generation they were computed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveSet {
    pub destinations: DestinationSet,
    pub built_at: u64,
}

impl MoveSet {
    pub fn new(destinations: DestinationSet, built_at: u64) -> Self {
        Self {
            destinations,
            built_at,
        }
    }

    pub fn is_fresh(&self, board: &Board) -> bool {
        self.built_at == board.generation()
    }
}

/// Three-way result of a move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    Legal,
    Illegal,
    NoPieceAtOrigin,
}

impl MoveOutcome {
    pub fn is_legal(self) -> bool {
        self == MoveOutcome::Legal
    }
}

/// Membership test. Does not look at the board and never recomputes.
pub fn is_legal(dest: Square, set: &MoveSet) -> bool {
    set.destinations.contains(dest)
}

/// Fail if `set` was built before the board last changed.
pub fn check_fresh(origin: Square, set: &MoveSet, board: &Board) -> BoardResult<()> {
    if set.is_fresh(board) {
        Ok(())
    } else {
        Err(BoardError::StaleMoveSet {
            square: origin,
            built_at: set.built_at,
            current: board.generation(),
        })
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
