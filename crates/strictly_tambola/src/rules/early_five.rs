//! Early five detection: any five distinct numbers on the ticket.
//!
//! Unlike lines, the required set is "any five", so immediacy is tracked
//! during the scan: the announcement that crosses the fifth distinct ticket
//! number must be the last one. Anything announced after it, including a
//! repeat or a number not on the ticket, makes the claim late.

use crate::ticket::Cell;
use crate::verdict::{Assessment, Reason};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Distinct ticket numbers that must be crossed for an early five.
pub const EARLY_FIVE_TARGET: usize = 5;

/// Assesses an early-five claim over every row of the grid.
#[instrument(skip(rows, announced), fields(rows = rows.len(), announced = announced.len()))]
pub fn assess_early_five<R: AsRef<[Cell]>>(rows: &[R], announced: &[u32]) -> Assessment {
    let Some(last) = announced.len().checked_sub(1) else {
        return Assessment::rejected(Reason::NothingAnnounced);
    };

    let on_ticket: HashSet<u32> = rows
        .iter()
        .flat_map(|row| row.as_ref())
        .filter_map(|cell| cell.number())
        .collect();

    let mut crossed = HashSet::with_capacity(EARLY_FIVE_TARGET);
    let mut fifth_crossing = None;
    for (index, &number) in announced.iter().enumerate() {
        if on_ticket.contains(&number) && crossed.insert(number) && crossed.len() == EARLY_FIVE_TARGET
        {
            fifth_crossing = Some(index);
            break;
        }
    }

    let assessment = match fifth_crossing {
        None => Assessment::rejected(Reason::TooFewCrossed {
            crossed: crossed.len(),
        }),
        Some(index) if index == last => Assessment::accepted(),
        Some(index) => {
            debug!(index, last, "Fifth crossing was not the last announcement");
            Assessment::rejected(Reason::LateClaim)
        }
    };
    debug!(%assessment, "Early five assessed");
    assessment
}

/// Returns true if the last announcement crossed the fifth distinct ticket
/// number.
pub fn is_early_five_complete<R: AsRef<[Cell]>>(rows: &[R], announced: &[u32]) -> bool {
    assess_early_five(rows, announced).is_accepted()
}
