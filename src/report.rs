//! Presentation of claim outcomes for the command line.

use derive_getters::Getters;
use serde::Serialize;
use strictly_tambola::{Assessment, GameType, Reason, Verdict};

/// Outcome of one claim, ready to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct ClaimReport {
    /// Claimed pattern.
    #[getter(copy)]
    game_type: GameType,
    /// `Accepted` or `Rejected`.
    #[getter(copy)]
    verdict: Verdict,
    /// Why the verdict was reached.
    #[getter(copy)]
    reason: Reason,
    /// How many numbers had been announced.
    #[getter(copy)]
    announced: usize,
}

impl ClaimReport {
    /// Creates a report from an assessment.
    pub fn new(game_type: GameType, assessment: Assessment, announced: usize) -> Self {
        Self {
            game_type,
            verdict: assessment.verdict(),
            reason: assessment.reason(),
            announced,
        }
    }

    /// Renders the report as a JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for ClaimReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} - {} (after {} announced)",
            self.game_type, self.verdict, self.reason, self.announced
        )
    }
}
