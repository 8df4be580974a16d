//! Board controller: owns the grid and the per-piece move-set cache, and
//! answers move attempts against that cache.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    board::Board,
    error::{BoardError, BoardResult},
    movegen::destinations,
    types::*,
    validate::{MoveOutcome, MoveSet, check_fresh, is_legal},
};

/// Outcome of a move attempt together with the coordinates that were asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub from: Coord,
    pub to: Coord,
    pub outcome: MoveOutcome,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.outcome {
            MoveOutcome::Legal => "Success!",
            MoveOutcome::Illegal => "Fail!",
            MoveOutcome::NoPieceAtOrigin => "No piece at start!",
        };
        write!(
            f,
            "Checking move - From: {}  To: {} -- {}",
            self.from, self.to, status
        )
    }
}

#[derive(Clone, Debug)]
pub struct Chessboard {
    board: Board,
    move_sets: [Option<MoveSet>; NUM_SQUARES],
}

impl Default for Chessboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Chessboard {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            move_sets: [None; NUM_SQUARES],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Place a piece. Cached move sets go stale until the next
    /// [`recompute_all_move_sets`](Self::recompute_all_move_sets).
    pub fn set_piece(&mut self, piece: Piece, coord: Coord) -> BoardResult<()> {
        self.board.place(piece, coord)
    }

    pub fn remove_piece(&mut self, coord: Coord) -> BoardResult<Option<Piece>> {
        self.board.remove(coord)
    }

    /// Rebuild the destination set of every piece on the board.
    pub fn recompute_all_move_sets(&mut self) {
        let generation = self.board.generation();
        let mut count = 0usize;
        for sq in Square::all() {
            let slot = &mut self.move_sets[sq.index() as usize];
            *slot = match self.board.piece_at(sq) {
                Some(_) => {
                    count += 1;
                    Some(MoveSet::new(destinations(&self.board, sq), generation))
                }
                None => None,
            };
        }
        debug!(pieces = count, generation, "rebuilt move sets");
    }

    /// Cached move set for the piece on `coord`, fresh or not.
    pub fn move_set(&self, coord: Coord) -> Option<&MoveSet> {
        coord
            .square()
            .and_then(|sq| self.move_sets[sq.index() as usize].as_ref())
    }

    /// Report whether `from -> to` is legal. Never changes the board.
    pub fn attempt_move(&self, from: Coord, to: Coord) -> BoardResult<MoveReport> {
        let report = |outcome| MoveReport { from, to, outcome };

        let origin = match from.square() {
            Some(sq) if self.board.piece_at(sq).is_some() => sq,
            _ => return Ok(report(MoveOutcome::NoPieceAtOrigin)),
        };

        let set = self.move_sets[origin.index() as usize]
            .as_ref()
            .ok_or(BoardError::MissingMoveSet { square: origin })?;
        if let Err(e) = check_fresh(origin, set, &self.board) {
            warn!(%e, "refusing to validate against a stale move set");
            return Err(e);
        }

        let outcome = match to.square() {
            Some(dest) if is_legal(dest, set) => MoveOutcome::Legal,
            _ => MoveOutcome::Illegal,
        };
        Ok(report(outcome))
    }

    /// Like [`attempt_move`](Self::attempt_move), but a legal move is played:
    /// the piece is relocated (replacing any captured piece) and every move
    /// set is rebuilt.
    pub fn commit_move(&mut self, from: Coord, to: Coord) -> BoardResult<MoveReport> {
        let report = self.attempt_move(from, to)?;
        if report.outcome.is_legal() {
            // Both squares exist: the origin held a piece and the target was in its set.
            if let (Some(src), Some(dst)) = (from.square(), to.square()) {
                let moving = self.board.set_piece(src, None);
                let captured = self.board.set_piece(dst, moving);
                debug!(from = %src, to = %dst, captured = ?captured, "move played");
                self.recompute_all_move_sets();
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
