//! Move checker CLI
//!
//! Print a board scenario and check its moves.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use board_core::RankOrder;
use move_checker::{Scenario, run};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Bishop/Rook Move Checker");
    println!();
    println!("Usage:");
    println!("  move_checker [SCENARIO.toml] [--json] [--descending]");
    println!();
    println!("Without a scenario file the reference setup is used:");
    println!("  white pawns b4, e4; white bishop c3; black pawn f6; black rook e6");
    println!();
    println!("Options:");
    println!("  --json        print the full run summary as JSON");
    println!("  --descending  print rank 8 on top");
    println!();
    println!("Logging is controlled with RUST_LOG (default: warn).");
}

struct Args {
    scenario: Option<PathBuf>,
    json: bool,
    descending: bool,
}

fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut parsed = Args {
        scenario: None,
        json: false,
        descending: false,
    };
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--json" => parsed.json = true,
            "--descending" => parsed.descending = true,
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            path => {
                if parsed.scenario.is_some() {
                    bail!("only one scenario file may be given");
                }
                parsed.scenario = Some(PathBuf::from(path));
            }
        }
    }
    Ok(Some(parsed))
}

fn real_main() -> Result<bool> {
    let argv: Vec<String> = env::args().skip(1).collect();
    let Some(args) = parse_args(&argv)? else {
        print_usage();
        return Ok(true);
    };

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::reference(),
    };
    if args.descending {
        scenario.render.rank_order = RankOrder::Descending;
    }

    let summary = run(&scenario).context("checking scenario moves")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.text_report());
        for m in &summary.mismatches {
            eprintln!("Expected {:?}: {}", m.expected, m.report);
        }
    }
    Ok(summary.passed())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match real_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
