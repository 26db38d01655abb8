//! Line detection: top, middle and bottom rows.

use super::immediacy::{assess_required, required_numbers};
use crate::ticket::Cell;
use crate::verdict::Assessment;
use tracing::{debug, instrument};

/// Assesses a line claim on a single row.
///
/// The required set is the row's playable numbers. The row may be any
/// length; blanks are ignored.
#[instrument(skip(row, announced), fields(cells = row.len(), announced = announced.len()))]
pub fn assess_line(row: &[Cell], announced: &[u32]) -> Assessment {
    let required = required_numbers(row);
    let assessment = assess_required(&required, announced);
    debug!(%assessment, "Line assessed");
    assessment
}

/// Returns true if every number on the row has been announced and the last
/// announced number is on the row.
pub fn is_line_complete(row: &[Cell], announced: &[u32]) -> bool {
    assess_line(row, announced).is_accepted()
}
