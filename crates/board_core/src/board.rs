use tracing::debug;

use crate::error::{BoardError, BoardResult};
use crate::types::*;

/// A single square of the grid: fixed shading plus an optional occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    square: Square,
    shade: Shade,
    piece: Option<Piece>,
}

impl Cell {
    pub fn square(&self) -> Square {
        self.square
    }
    pub fn shade(&self) -> Shade {
        self.shade
    }
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// The 8x8 grid.
///
/// Every mutation bumps `generation`, so anything derived from the
/// occupancy can tell whether it was computed against the current layout.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
    generation: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let cells = std::array::from_fn(|i| {
            let square = Square::from_index(i as u8).expect("index below NUM_SQUARES");
            Cell {
                square,
                shade: square.shade(),
                piece: None,
            }
        });
        Board {
            cells,
            generation: 0,
        }
    }

    /// Cell at `coord`, or `None` if it is off the board.
    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        coord.square().map(|sq| self.cell(sq))
    }

    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.index() as usize]
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index() as usize].piece
    }

    /// Put `piece` on `coord`, replacing whatever was there.
    pub fn place(&mut self, piece: Piece, coord: Coord) -> BoardResult<()> {
        let sq = coord.square().ok_or(BoardError::OutOfRange { coord })?;
        let replaced = self.set_piece(sq, Some(piece));
        debug!(
            square = %sq,
            piece = %piece,
            replaced = ?replaced,
            generation = self.generation,
            "placed piece"
        );
        Ok(())
    }

    /// Clear `coord`, returning the piece that stood there.
    pub fn remove(&mut self, coord: Coord) -> BoardResult<Option<Piece>> {
        let sq = coord.square().ok_or(BoardError::OutOfRange { coord })?;
        Ok(self.set_piece(sq, None))
    }

    /// Low-level slot write. Returns the previous occupant.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) -> Option<Piece> {
        self.generation += 1;
        std::mem::replace(&mut self.cells[sq.index() as usize].piece, pc)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Every occupied square with its piece, in square order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .filter_map(|c| c.piece.map(|pc| (c.square, pc)))
    }

    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
