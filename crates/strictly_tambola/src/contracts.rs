//! Preconditions for claim evaluation.
//!
//! Rules in [`crate::rules`] are total over grids of any shape. The
//! dispatcher only hands them a grid after [`WellShaped`] has passed.

use crate::error::ShapeError;
use crate::ticket::{Cell, TICKET_COLUMNS, TICKET_ROWS};
use tracing::{debug, instrument};

/// Precondition: the grid has exactly 3 rows of 9 cells.
///
/// Cell contents are not inspected; number ranges and duplicates are
/// outside this check.
pub struct WellShaped;

impl WellShaped {
    /// Validates the grid shape, naming the first problem found.
    #[instrument(skip(rows), fields(row_count = rows.len()))]
    pub fn check<R: AsRef<[Cell]>>(rows: &[R]) -> Result<(), ShapeError> {
        if rows.len() != TICKET_ROWS {
            debug!("Wrong number of rows");
            return Err(ShapeError::RowCount(rows.len()));
        }

        for (row, cells) in rows.iter().enumerate() {
            let len = cells.as_ref().len();
            if len != TICKET_COLUMNS {
                debug!(row, len, "Wrong row length");
                return Err(ShapeError::RowLength { row, len });
            }
        }

        Ok(())
    }
}

/// Returns true iff the grid has exactly 3 rows of 9 cells.
pub fn check_ticket_shape<R: AsRef<[Cell]>>(rows: &[R]) -> bool {
    WellShaped::check(rows).is_ok()
}
