//! The immediate-claim rule shared by fixed-set patterns.
//!
//! A pattern with a fixed required set (a line, the full house) may only be
//! claimed on the announcement that completes it. Once the last announced
//! number is outside the required set, the claim is stale.

use crate::ticket::Cell;
use crate::verdict::{Assessment, Reason};
use std::collections::HashSet;
use tracing::instrument;

/// Collects the playable numbers among `cells`, in order.
pub(crate) fn required_numbers<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Vec<u32> {
    cells.into_iter().filter_map(|cell| cell.number()).collect()
}

/// Returns true if the last announced number belongs to `required`.
///
/// An empty announcement sequence has no "now" and is never immediate.
pub fn is_immediate_claim(required: &[u32], announced: &[u32]) -> bool {
    announced.last().is_some_and(|last| required.contains(last))
}

/// Assesses a claim on a fixed required set.
///
/// Accepted iff every required number was announced and the last announced
/// number is one of them.
#[instrument(skip(required, announced), fields(required = required.len(), announced = announced.len()))]
pub fn assess_required(required: &[u32], announced: &[u32]) -> Assessment {
    if announced.is_empty() {
        return Assessment::rejected(Reason::NothingAnnounced);
    }

    let called: HashSet<u32> = announced.iter().copied().collect();
    let missing = required.iter().filter(|n| !called.contains(*n)).count();
    if missing > 0 {
        return Assessment::rejected(Reason::PatternIncomplete { missing });
    }

    if !is_immediate_claim(required, announced) {
        return Assessment::rejected(Reason::LateClaim);
    }

    Assessment::accepted()
}
