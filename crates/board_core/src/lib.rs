//! Chessboard model with sliding-piece move generation.
//!
//! The grid holds at most one piece per square. After setting up pieces,
//! [`Chessboard::recompute_all_move_sets`] builds a legal-destination set for
//! every piece; [`Chessboard::attempt_move`] then checks a proposed move
//! against that cache without changing the board.

pub mod bitboard;
pub mod board;
pub mod controller;
pub mod error;
pub mod movegen;
pub mod render;
pub mod types;
pub mod validate;

pub use bitboard::Bitboard;
pub use board::*;
pub use controller::*;
pub use error::*;
pub use movegen::*;
pub use render::*;
pub use types::*;
pub use validate::*;
