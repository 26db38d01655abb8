//! Strictly Claims - Unified CLI
//!
//! Evaluates tambola claims from files, arguments, or the bundled demo.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_claims::{Cli, ClaimFile, ClaimReport, Command, demo};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Check { file, json } => {
            let claim = ClaimFile::from_file(&file)?;
            run_claim(&claim, json)
        }
        Command::Evaluate {
            ticket,
            announced,
            game_type,
            json,
        } => {
            let claim = ClaimFile::from_args(&ticket, &announced, &game_type)?;
            run_claim(&claim, json)
        }
        Command::Demo => run_demo(),
    }
}

/// Evaluate one claim and print the report
#[instrument(skip(claim), fields(game_type = %claim.game_type()))]
fn run_claim(claim: &ClaimFile, json: bool) -> Result<()> {
    let report = claim.evaluate()?;
    print_report(&report, json)
}

fn print_report(report: &ClaimReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Run every demonstration scenario, printing each outcome
fn run_demo() -> Result<()> {
    info!("Running demonstration claims");

    for (index, scenario) in demo::scenarios().iter().enumerate() {
        println!("Example {}: {}", index + 1, scenario.title);
        println!("  {}", scenario.note);
        println!("  Game type: {}", scenario.claim.game_type());
        println!("  Announced: {:?}", scenario.claim.announced());
        match demo::run(scenario) {
            Ok(report) => println!("  Result: {} - {}\n", report.verdict(), report.reason()),
            Err(e) => println!("  Error: {}\n", e),
        }
    }

    Ok(())
}
