//! Tests for the bundled demonstration claims.

use strictly_claims::demo::{run, scenarios};
use strictly_tambola::{ClaimError, Reason, Verdict};

fn outcome(title: &str) -> Result<(Verdict, Reason), ClaimError> {
    let scenario = scenarios()
        .into_iter()
        .find(|s| s.title == title)
        .unwrap_or_else(|| panic!("missing scenario {title}"));
    run(&scenario).map(|report| (report.verdict(), report.reason()))
}

#[test]
fn test_valid_top_line() {
    assert_eq!(
        outcome("Valid top line claim"),
        Ok((Verdict::Accepted, Reason::PatternCompleted))
    );
}

#[test]
fn test_incomplete_middle_line() {
    assert_eq!(
        outcome("Incomplete middle line claim"),
        Ok((Verdict::Rejected, Reason::PatternIncomplete { missing: 4 }))
    );
}

#[test]
fn test_late_early_five() {
    assert_eq!(
        outcome("Late early five claim"),
        Ok((Verdict::Rejected, Reason::LateClaim))
    );
}

#[test]
fn test_full_house() {
    assert_eq!(
        outcome("Valid full house claim"),
        Ok((Verdict::Accepted, Reason::PatternCompleted))
    );
}

#[test]
fn test_ticket_with_blanks() {
    assert_eq!(
        outcome("Top line on a ticket with blanks"),
        Ok((Verdict::Accepted, Reason::PatternCompleted))
    );
}

#[test]
fn test_malformed_ticket() {
    assert_eq!(
        outcome("Malformed ticket"),
        Ok((Verdict::Rejected, Reason::InvalidTicketShape))
    );
}

#[test]
fn test_unknown_game_type() {
    assert_eq!(
        outcome("Unknown game type"),
        Err(ClaimError::UnknownGameType("invalid_game".to_string()))
    );
}

#[test]
fn test_every_scenario_has_a_title() {
    assert_eq!(scenarios().len(), 7);
    assert!(scenarios().iter().all(|s| !s.title.is_empty()));
}
