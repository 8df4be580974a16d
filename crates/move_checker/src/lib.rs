//! Move checker for bishop/rook board scenarios
//!
//! Loads a scenario (built-in reference setup or a TOML file), prints the
//! board and checks every listed move against the board's move sets.
//!
//! # Usage
//!
//! ```bash
//! # Reference setup
//! cargo run -p move_checker
//!
//! # Custom scenario, JSON output
//! cargo run -p move_checker -- my_setup.toml --json
//! ```

mod scenario;

pub use scenario::*;

use serde::Serialize;
use tracing::info;

use board_core::{MoveReport, render};

/// A checked move whose outcome differed from the scenario's expectation.
#[derive(Debug, Clone, Serialize)]
pub struct Mismatch {
    pub report: MoveReport,
    pub expected: Expectation,
}

/// Everything a scenario run produces.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub board: String,
    pub reports: Vec<MoveReport>,
    pub mismatches: Vec<Mismatch>,
}

impl RunSummary {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Board followed by one status line per move.
    pub fn text_report(&self) -> String {
        let mut out = self.board.clone();
        for r in &self.reports {
            out.push_str(&r.to_string());
            out.push('\n');
        }
        out
    }
}

pub fn run(scenario: &Scenario) -> Result<RunSummary, ScenarioError> {
    let cb = scenario.build()?;
    let board = render(cb.board(), &scenario.render);

    let mut reports = Vec::with_capacity(scenario.moves.len());
    let mut mismatches = Vec::new();
    for mv in &scenario.moves {
        let report = cb.attempt_move(mv.from, mv.to)?;
        if let Some(expected) = mv.expect {
            if !expected.matches(report.outcome) {
                mismatches.push(Mismatch { report, expected });
            }
        }
        reports.push(report);
    }

    info!(
        moves = reports.len(),
        mismatches = mismatches.len(),
        "scenario checked"
    );
    Ok(RunSummary {
        board,
        reports,
        mismatches,
    })
}
