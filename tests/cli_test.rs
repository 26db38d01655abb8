//! Tests for command-line argument parsing.

use clap::Parser;
use strictly_claims::{Cli, Command};

#[test]
fn test_check_command() {
    let cli = Cli::try_parse_from(["strictly_claims", "check", "--file", "claim.toml", "--json"])
        .expect("valid arguments");
    match cli.command {
        Command::Check { file, json } => {
            assert_eq!(file.to_str(), Some("claim.toml"));
            assert!(json);
        }
        other => panic!("expected check, got {other:?}"),
    }
}

#[test]
fn test_evaluate_command_defaults() {
    let cli = Cli::try_parse_from([
        "strictly_claims",
        "evaluate",
        "--ticket",
        "1,2;3,4",
        "--game-type",
        "top_line",
    ])
    .expect("valid arguments");
    match cli.command {
        Command::Evaluate {
            ticket,
            announced,
            game_type,
            json,
        } => {
            assert_eq!(ticket, "1,2;3,4");
            assert_eq!(announced, "");
            assert_eq!(game_type, "top_line");
            assert!(!json);
        }
        other => panic!("expected evaluate, got {other:?}"),
    }
}

#[test]
fn test_evaluate_requires_game_type() {
    assert!(Cli::try_parse_from(["strictly_claims", "evaluate", "--ticket", "1"]).is_err());
}

#[test]
fn test_demo_command() {
    let cli = Cli::try_parse_from(["strictly_claims", "demo"]).expect("valid arguments");
    assert!(matches!(cli.command, Command::Demo));
}
