//! Command-line interface for strictly_claims.

use clap::{Parser, Subcommand};

/// Strictly Claims - tambola claim checker
#[derive(Parser, Debug)]
#[command(name = "strictly_claims")]
#[command(about = "Check tambola claims against the immediate-claim rule", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a claim stored in a TOML file
    Check {
        /// Path to the claim file
        #[arg(short, long)]
        file: std::path::PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a claim given on the command line
    Evaluate {
        /// Ticket rows separated by ';', cells by ',' ("-" or 0 for blanks)
        #[arg(short, long)]
        ticket: String,

        /// Announced numbers in call order, separated by ','
        #[arg(short, long, default_value = "")]
        announced: String,

        /// Claimed pattern (top_line, middle_line, bottom_line, full_house, early_five)
        #[arg(short, long)]
        game_type: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the bundled demonstration claims
    Demo,
}
