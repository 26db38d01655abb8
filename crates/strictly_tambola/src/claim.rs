//! Claim dispatch: from a game type to the matching rule.

use crate::contracts::WellShaped;
use crate::error::ClaimError;
use crate::game_type::GameType;
use crate::rules::{assess_early_five, assess_full_house, assess_line};
use crate::ticket::{Cell, RowPosition, Ticket};
use crate::verdict::{Assessment, Reason, Verdict};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Assesses a claim for a known game type.
///
/// A grid that is not 3x9 is rejected with [`Reason::InvalidTicketShape`]
/// before any rule runs.
#[instrument(skip(rows, announced), fields(rows = rows.len(), announced = announced.len()))]
pub fn assess<R: AsRef<[Cell]>>(rows: &[R], announced: &[u32], game_type: GameType) -> Assessment {
    if let Err(error) = WellShaped::check(rows) {
        debug!(%error, "Rejecting claim on malformed ticket");
        return Assessment::rejected(Reason::InvalidTicketShape);
    }

    let assessment = match game_type {
        GameType::TopLine => assess_row(rows, RowPosition::Top, announced),
        GameType::MiddleLine => assess_row(rows, RowPosition::Middle, announced),
        GameType::BottomLine => assess_row(rows, RowPosition::Bottom, announced),
        GameType::FullHouse => assess_full_house(rows, announced),
        GameType::EarlyFive => assess_early_five(rows, announced),
    };
    info!(%game_type, %assessment, "Claim assessed");
    assessment
}

fn assess_row<R: AsRef<[Cell]>>(rows: &[R], position: RowPosition, announced: &[u32]) -> Assessment {
    match rows.get(position.to_index()) {
        Some(row) => assess_line(row.as_ref(), announced),
        None => Assessment::rejected(Reason::InvalidTicketShape),
    }
}

/// Evaluates a claim for a known game type.
pub fn evaluate<R: AsRef<[Cell]>>(rows: &[R], announced: &[u32], game_type: GameType) -> Verdict {
    assess(rows, announced, game_type).verdict()
}

/// Assesses a claim given its game-type tag.
///
/// # Errors
///
/// Returns [`ClaimError::UnknownGameType`] if `tag` is not a known pattern.
/// The tag is checked before the ticket, so an unknown tag is reported even
/// for a malformed ticket.
pub fn assess_claim<R: AsRef<[Cell]>>(
    rows: &[R],
    announced: &[u32],
    tag: &str,
) -> Result<Assessment, ClaimError> {
    let game_type = GameType::from_tag(tag)?;
    Ok(assess(rows, announced, game_type))
}

/// Evaluates a claim given its game-type tag.
///
/// # Errors
///
/// Returns [`ClaimError::UnknownGameType`] if `tag` is not a known pattern.
pub fn evaluate_claim<R: AsRef<[Cell]>>(
    rows: &[R],
    announced: &[u32],
    tag: &str,
) -> Result<Verdict, ClaimError> {
    assess_claim(rows, announced, tag).map(|assessment| assessment.verdict())
}

/// A player's claim: a pattern on a ticket, at a point in the draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Claim {
    /// Claimed pattern.
    #[getter(copy)]
    game_type: GameType,
    /// Ticket the claim is made on.
    ticket: Ticket,
    /// Numbers announced so far, in call order.
    announced: Vec<u32>,
}

impl Claim {
    /// Creates a new claim.
    pub fn new(game_type: GameType, ticket: Ticket, announced: Vec<u32>) -> Self {
        Self {
            game_type,
            ticket,
            announced,
        }
    }

    /// Assesses the claim.
    pub fn assess(&self) -> Assessment {
        assess(self.ticket.rows(), &self.announced, self.game_type)
    }

    /// Evaluates the claim.
    pub fn evaluate(&self) -> Verdict {
        self.assess().verdict()
    }
}
