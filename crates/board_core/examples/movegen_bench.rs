//! Move-set rebuild benchmark.
//!
//! Rebuilds every piece's destination set on a handful of layouts many times
//! over and reports throughput.
//!
//! Usage:
//!   cargo run --release --example movegen_bench -p board_core

use board_core::{Chessboard, Color, Coord, Piece};
use std::time::Instant;

/// (name, [(piece, square)])
const LAYOUTS: &[(&str, &[(Piece, &str)])] = &[
    ("Lone rook", &[(Piece::rook(Color::White), "d4")]),
    ("Lone bishop", &[(Piece::bishop(Color::Black), "e5")]),
    (
        "Reference",
        &[
            (Piece::pawn(Color::White), "b4"),
            (Piece::pawn(Color::White), "e4"),
            (Piece::bishop(Color::White), "c3"),
            (Piece::pawn(Color::Black), "f6"),
            (Piece::rook(Color::Black), "e6"),
        ],
    ),
    (
        "Crowded",
        &[
            (Piece::rook(Color::White), "a1"),
            (Piece::rook(Color::White), "h1"),
            (Piece::bishop(Color::White), "c1"),
            (Piece::bishop(Color::White), "f1"),
            (Piece::queen(Color::White), "d1"),
            (Piece::rook(Color::Black), "a8"),
            (Piece::rook(Color::Black), "h8"),
            (Piece::bishop(Color::Black), "c8"),
            (Piece::bishop(Color::Black), "f8"),
            (Piece::queen(Color::Black), "d8"),
            (Piece::pawn(Color::White), "d4"),
            (Piece::pawn(Color::Black), "e5"),
        ],
    ),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Move Set Rebuild Benchmark ===");
    println!("Iterations per layout: {ITERATIONS}");
    println!();

    let mut total_time = std::time::Duration::ZERO;

    for (name, pieces) in LAYOUTS {
        let mut cb = Chessboard::new();
        for &(pc, at) in pieces.iter() {
            let coord = Coord::parse(at).expect("layout squares are valid");
            cb.set_piece(pc, coord).expect("layout squares are on the board");
        }

        print!("{name:.<20}");

        let start = Instant::now();
        for _ in 0..ITERATIONS {
            cb.recompute_all_move_sets();
        }
        let elapsed = start.elapsed();
        total_time += elapsed;

        let rps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!(" {:>2} pieces, {rps:>10.0} rebuilds/sec ({elapsed:>8.3?})", pieces.len());
    }

    println!();
    println!("{:=<70}", "");
    let avg = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * LAYOUTS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_time:.3?} ({avg:.0} rebuilds/sec)");
}
