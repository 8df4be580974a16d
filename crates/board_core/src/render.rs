//! Fixed-width text rendering of the board.
//!
//! ```text
//!      --a----b----c--...
//! --1--[   ][   ][   ]...
//! --3--[   ][   ][B-w]...
//! ```

use serde::{Deserialize, Serialize};

use crate::{board::Board, types::*};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    /// Rank 1 on the first row.
    #[default]
    Ascending,
    /// Rank 8 on the first row, as seen from white's side.
    Descending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub rank_order: RankOrder,
    /// Mark empty dark cells with `#`.
    pub shade_empty: bool,
}

const CORNER: &str = "     ";
const EMPTY_CELL: &str = "[   ]";
const DARK_CELL: &str = "[ # ]";

pub fn render(board: &Board, opts: &RenderOptions) -> String {
    let mut out = String::new();

    out.push_str(CORNER);
    for file in 1..=BOARD_WIDTH {
        out.push_str(&format!("--{}--", FILE_LETTERS[file as usize]));
    }
    out.push('\n');

    let ranks: Vec<i8> = match opts.rank_order {
        RankOrder::Ascending => (1..=BOARD_HEIGHT).collect(),
        RankOrder::Descending => (1..=BOARD_HEIGHT).rev().collect(),
    };
    for rank in ranks {
        out.push_str(&format!("--{rank}--"));
        for file in 1..=BOARD_WIDTH {
            let Some(cell) = board.cell_at(Coord::from_indices(file, rank)) else {
                continue;
            };
            match cell.piece() {
                Some(pc) => out.push_str(&format!("[{pc}]")),
                None if opts.shade_empty && cell.shade() == Shade::Dark => {
                    out.push_str(DARK_CELL)
                }
                None => out.push_str(EMPTY_CELL),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
