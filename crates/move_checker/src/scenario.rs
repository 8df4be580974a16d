//! Scenario files: which pieces to place and which moves to check.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use board_core::{
    BoardError, Chessboard, Color, Coord, MoveOutcome, Piece, PieceKind, RenderOptions,
};

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// One piece to put on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub color: Color,
    pub kind: PieceKind,
    pub at: Coord,
}

/// What the scenario author expects a move check to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Legal,
    Illegal,
    NoPiece,
}

impl Expectation {
    pub fn matches(self, outcome: MoveOutcome) -> bool {
        matches!(
            (self, outcome),
            (Expectation::Legal, MoveOutcome::Legal)
                | (Expectation::Illegal, MoveOutcome::Illegal)
                | (Expectation::NoPiece, MoveOutcome::NoPieceAtOrigin)
        )
    }
}

/// One move to check. `expect` is optional: some lines are only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCheck {
    pub from: Coord,
    pub to: Coord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Expectation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub render: RenderOptions,
    pub pieces: Vec<Placement>,
    pub moves: Vec<MoveCheck>,
}

fn place(color: Color, kind: PieceKind, letter: char, rank: i8) -> Placement {
    Placement {
        color,
        kind,
        at: Coord::new(letter, rank),
    }
}

fn check(from: (char, i8), to: (char, i8), expect: Option<Expectation>) -> MoveCheck {
    MoveCheck {
        from: Coord::new(from.0, from.1),
        to: Coord::new(to.0, to.1),
        expect,
    }
}

impl Scenario {
    /// Two white pawns, a white bishop, a black pawn and a black rook, with
    /// the ten classic bishop/rook checks.
    pub fn reference() -> Self {
        use Color::*;
        use Expectation::*;
        use PieceKind::*;

        Scenario {
            render: RenderOptions::default(),
            pieces: vec![
                place(White, Pawn, 'b', 4),
                place(White, Pawn, 'e', 4),
                place(White, Bishop, 'c', 3),
                place(Black, Pawn, 'f', 6),
                place(Black, Rook, 'e', 6),
            ],
            moves: vec![
                check(('c', 3), ('e', 1), Some(Legal)),
                check(('c', 3), ('f', 6), Some(Legal)),
                check(('c', 3), ('h', 5), Some(Illegal)),
                check(('c', 3), ('b', 4), Some(Illegal)),
                check(('c', 3), ('h', 8), Some(Illegal)),
                check(('e', 6), ('a', 6), Some(Legal)),
                check(('e', 6), ('e', 4), Some(Legal)),
                check(('e', 6), ('c', 5), Some(Illegal)),
                check(('e', 6), ('f', 6), Some(Illegal)),
                // The pawn on e4 stands between e6 and e1; reported only.
                check(('e', 6), ('e', 1), None),
            ],
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let scenario = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            pieces = scenario.pieces.len(),
            moves = scenario.moves.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Place every piece, then build all move sets.
    pub fn build(&self) -> Result<Chessboard, ScenarioError> {
        let mut cb = Chessboard::new();
        for p in &self.pieces {
            cb.set_piece(Piece::new(p.color, p.kind), p.at)?;
        }
        cb.recompute_all_move_sets();
        Ok(cb)
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod scenario_tests;
