//! Bundled demonstration claims.
//!
//! Each scenario is evaluated through the same path as user input, so the
//! demo doubles as a smoke test of the whole CLI.

use crate::claim_file::ClaimFile;
use crate::report::ClaimReport;
use strictly_tambola::{Cell, ClaimError};
use tracing::instrument;

/// One demonstration claim.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short title shown before the outcome.
    pub title: &'static str,
    /// What the scenario is expected to show.
    pub note: &'static str,
    /// The claim under test.
    pub claim: ClaimFile,
}

fn rows(numbers: &[[u32; 9]; 3]) -> Vec<Vec<Cell>> {
    numbers
        .iter()
        .map(|row| row.iter().copied().map(Cell::from).collect())
        .collect()
}

fn consecutive_ticket() -> Vec<Vec<Cell>> {
    rows(&[
        [1, 2, 3, 4, 5, 6, 7, 8, 9],
        [10, 11, 12, 13, 14, 15, 16, 17, 18],
        [19, 20, 21, 22, 23, 24, 25, 26, 27],
    ])
}

/// Returns the demonstration scenarios in display order.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "Valid top line claim",
            note: "last number of the row is the last announced",
            claim: ClaimFile::new("top_line".to_string(), (1..=9).collect(), consecutive_ticket()),
        },
        Scenario {
            title: "Incomplete middle line claim",
            note: "only five of nine numbers announced",
            claim: ClaimFile::new(
                "middle_line".to_string(),
                (10..=14).collect(),
                consecutive_ticket(),
            ),
        },
        Scenario {
            title: "Late early five claim",
            note: "two more numbers were announced after the fifth crossing",
            claim: ClaimFile::new(
                "early_five".to_string(),
                vec![1, 2, 3, 4, 5, 100, 200],
                consecutive_ticket(),
            ),
        },
        Scenario {
            title: "Valid full house claim",
            note: "all 27 numbers announced, claim made on the last",
            claim: ClaimFile::new("full_house".to_string(), (1..=27).collect(), consecutive_ticket()),
        },
        Scenario {
            title: "Top line on a ticket with blanks",
            note: "blank cells are never required",
            claim: ClaimFile::new(
                "top_line".to_string(),
                vec![1, 3, 5, 6, 8, 9],
                rows(&[
                    [1, 0, 3, 0, 5, 6, 0, 8, 9],
                    [10, 11, 12, 13, 14, 15, 16, 17, 18],
                    [19, 20, 21, 22, 23, 24, 25, 26, 27],
                ]),
            ),
        },
        Scenario {
            title: "Malformed ticket",
            note: "two rows is not a ticket, so the claim is rejected",
            claim: ClaimFile::new(
                "top_line".to_string(),
                (1..=9).collect(),
                consecutive_ticket().into_iter().take(2).collect(),
            ),
        },
        Scenario {
            title: "Unknown game type",
            note: "reported as an error, not as a rejected claim",
            claim: ClaimFile::new("invalid_game".to_string(), vec![1, 2, 3], consecutive_ticket()),
        },
    ]
}

/// Evaluates a scenario.
#[instrument(skip(scenario), fields(title = scenario.title))]
pub fn run(scenario: &Scenario) -> Result<ClaimReport, ClaimError> {
    scenario.claim.evaluate()
}
