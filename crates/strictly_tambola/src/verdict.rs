//! Claim outcomes: the plain verdict and its structured explanation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Final answer to a claim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Verdict {
    /// The claim wins.
    Accepted,
    /// The claim loses.
    Rejected,
}

impl Verdict {
    /// Returns true for [`Verdict::Accepted`].
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

/// Why a claim was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// The pattern became complete on the last announced number.
    #[display("pattern completed on the last announced number")]
    PatternCompleted,

    /// The grid is not 3 rows of 9 cells.
    #[display("invalid ticket shape")]
    InvalidTicketShape,

    /// No numbers have been announced yet.
    #[display("no numbers announced")]
    NothingAnnounced,

    /// Some required numbers have not been announced.
    #[display("{} required number(s) not yet announced", missing)]
    PatternIncomplete {
        /// How many required numbers are still missing.
        missing: usize,
    },

    /// The pattern was already complete before the last announcement.
    #[display("claim not made on the completing announcement")]
    LateClaim,

    /// Fewer than five distinct ticket numbers have been crossed.
    #[display("only {} ticket number(s) crossed", crossed)]
    TooFewCrossed {
        /// Distinct ticket numbers crossed so far.
        crossed: usize,
    },
}

/// A verdict together with its reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Assessment {
    /// Accepted or rejected.
    #[getter(copy)]
    verdict: Verdict,
    /// Explanation for the verdict.
    #[getter(copy)]
    reason: Reason,
}

impl Assessment {
    /// An accepted claim.
    pub fn accepted() -> Self {
        Self {
            verdict: Verdict::Accepted,
            reason: Reason::PatternCompleted,
        }
    }

    /// A rejected claim with the given reason.
    pub fn rejected(reason: Reason) -> Self {
        Self {
            verdict: Verdict::Rejected,
            reason,
        }
    }

    /// Returns true if the claim was accepted.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.verdict, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_strings() {
        assert_eq!(Verdict::Accepted.to_string(), "Accepted");
        assert_eq!(Verdict::Rejected.to_string(), "Rejected");
    }

    #[test]
    fn test_verdict_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::Accepted);
        assert_eq!(Verdict::from(false), Verdict::Rejected);
    }

    #[test]
    fn test_assessment_display() {
        let assessment = Assessment::rejected(Reason::PatternIncomplete { missing: 2 });
        assert_eq!(
            assessment.to_string(),
            "Rejected - 2 required number(s) not yet announced"
        );
        assert!(!assessment.is_accepted());
        assert_eq!(assessment.verdict(), Verdict::Rejected);
    }
}
