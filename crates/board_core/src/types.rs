use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: i8 = 8;
pub const BOARD_HEIGHT: i8 = 8;
pub const NUM_SQUARES: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// File letters indexed by 1-based file number. Index 0 is unused.
pub const FILE_LETTERS: [char; 9] = [' ', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    /// First letter of the side's name, as shown on the rendered board.
    pub fn initial(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Movement capability of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Bishop,
    Rook,
    Queen,
}
impl PieceKind {
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
    pub const fn pawn(color: Color) -> Self {
        Self::new(color, PieceKind::Pawn)
    }
    pub const fn bishop(color: Color) -> Self {
        Self::new(color, PieceKind::Bishop)
    }
    pub const fn rook(color: Color) -> Self {
        Self::new(color, PieceKind::Rook)
    }
    pub const fn queen(color: Color) -> Self {
        Self::new(color, PieceKind::Queen)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.letter(), self.color.initial())
    }
}

/// Light/dark shading of a cell. Display only, no rule relevance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    Dark,
    Light,
}

/// An on-board square, 0..64. Bit 0 = a1, bit 63 = h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const fn from_index(idx: u8) -> Option<Square> {
        if (idx as usize) < NUM_SQUARES {
            Some(Square(idx))
        } else {
            None
        }
    }

    /// Square at 1-based file and rank, or `None` off the board.
    pub fn at(file: i8, rank: i8) -> Option<Square> {
        if (1..=BOARD_WIDTH).contains(&file) && (1..=BOARD_HEIGHT).contains(&rank) {
            Some(Square(((rank - 1) * BOARD_WIDTH + (file - 1)) as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }
    pub const fn file(self) -> i8 {
        (self.0 % 8) as i8 + 1
    }
    pub const fn rank(self) -> i8 {
        (self.0 / 8) as i8 + 1
    }

    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::at(self.file() + df, self.rank() + dr)
    }

    pub fn coord(self) -> Coord {
        Coord {
            file: self.file(),
            rank: self.rank(),
        }
    }

    /// a1 is dark; shading alternates with coordinate parity.
    pub fn shade(self) -> Shade {
        if (self.file() + self.rank()) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILE_LETTERS[self.file() as usize], self.rank())
    }
}

/// A (file, rank) pair that may lie off the board.
///
/// Both components are 1-based. Anything outside `[1,8]x[1,8]` simply has no
/// square; it is never an error to hold one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    /// Build from a file letter and rank number. The file is the letter's
    /// position in the alphabet, so `i..=z` land off the board but are kept
    /// as given. Anything that is not an ASCII letter maps to file 0.
    pub fn new(letter: char, rank: i8) -> Self {
        let letter = letter.to_ascii_lowercase();
        let file = if letter.is_ascii_lowercase() {
            (letter as u8 - b'a') as i8 + 1
        } else {
            0
        };
        Self { file, rank }
    }

    pub const fn from_indices(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Parse algebraic text such as `"c3"`. Returns `None` when the text
    /// is not a letter followed by a number; an out-of-range but well-formed
    /// coordinate such as `"z9"` parses to an off-board `Coord`.
    pub fn parse(text: &str) -> Option<Coord> {
        let text = text.trim();
        let mut chars = text.chars();
        let letter = chars.next()?;
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let rank: i8 = chars.as_str().parse().ok()?;
        Some(Coord::new(letter, rank))
    }

    pub fn square(self) -> Option<Square> {
        Square::at(self.file, self.rank)
    }

    pub fn is_on_board(self) -> bool {
        self.square().is_some()
    }

    /// File letter, including off-board files `i..=z`. Files with no
    /// letter show as `?`.
    pub fn letter(self) -> char {
        if (1..=26).contains(&self.file) {
            (b'a' + (self.file - 1) as u8) as char
        } else {
            '?'
        }
    }
}

impl From<Square> for Coord {
    fn from(sq: Square) -> Self {
        sq.coord()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.letter(), self.rank)
    }
}

impl Serialize for Coord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}{}", self.letter(), self.rank))
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Coord::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid coordinate: {text:?}")))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
