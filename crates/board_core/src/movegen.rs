use tracing::trace;

use crate::{bitboard::Bitboard, board::Board, types::*};

/// Legal destinations of a single piece.
pub type DestinationSet = Bitboard;

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Ray directions for sliding pieces. Non-sliders get an empty table.
pub fn slide_dirs(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRS,
        PieceKind::Rook => &ROOK_DIRS,
        PieceKind::Queen => &QUEEN_DIRS,
        PieceKind::Pawn => &[],
    }
}

/// Legal destinations for whatever stands on `from`. Empty if nothing does.
pub fn destinations(board: &Board, from: Square) -> DestinationSet {
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return DestinationSet::EMPTY,
    };
    let set = match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            gen_slider(board, from, pc.color, slide_dirs(pc.kind))
        }
    };
    trace!(square = %from, piece = %pc, count = set.len(), "generated destinations");
    set
}

/// Pawns have no movement rule yet: forward pushes and diagonal captures
/// are not modelled, so the set is always empty.
fn gen_pawn(_board: &Board, _from: Square, _c: Color) -> DestinationSet {
    DestinationSet::EMPTY
}

/// Cast a ray per direction until the edge, a friendly piece (excluded)
/// or an enemy piece (included).
pub fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)]) -> DestinationSet {
    let mut out = DestinationSet::EMPTY;
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.insert(to),
                Some(pc) if pc.color != c => {
                    out.insert(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(df, dr);
        }
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
