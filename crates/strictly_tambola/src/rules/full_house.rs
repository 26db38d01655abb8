//! Full house detection: every number on the ticket.

use super::immediacy::{assess_required, required_numbers};
use crate::ticket::Cell;
use crate::verdict::Assessment;
use tracing::{debug, instrument};

/// Assesses a full-house claim over every row of the grid.
#[instrument(skip(rows, announced), fields(rows = rows.len(), announced = announced.len()))]
pub fn assess_full_house<R: AsRef<[Cell]>>(rows: &[R], announced: &[u32]) -> Assessment {
    let required = required_numbers(rows.iter().flat_map(|row| row.as_ref()));
    let assessment = assess_required(&required, announced);
    debug!(%assessment, "Full house assessed");
    assessment
}

/// Returns true if every ticket number has been announced and the last
/// announced number is on the ticket.
pub fn is_full_house_complete<R: AsRef<[Cell]>>(rows: &[R], announced: &[u32]) -> bool {
    assess_full_house(rows, announced).is_accepted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Reason;

    fn small_ticket() -> [[Cell; 3]; 3] {
        [[1, 2, 0], [3, 0, 4], [5, 6, 0]].map(|row| row.map(Cell::from))
    }

    #[test]
    fn test_full_house_on_last_number() {
        assert!(is_full_house_complete(&small_ticket(), &[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_full_house_with_trailing_noise() {
        assert!(!is_full_house_complete(&small_ticket(), &[1, 2, 3, 4, 5, 6, 7]));
    }

    #[test]
    fn test_full_house_any_order() {
        assert!(is_full_house_complete(&small_ticket(), &[6, 5, 4, 3, 2, 1]));
    }

    #[test]
    fn test_full_house_missing_numbers() {
        assert_eq!(
            assess_full_house(&small_ticket(), &[1, 2, 3, 4, 5, 6, 7][..4]).reason(),
            Reason::PatternIncomplete { missing: 2 }
        );
    }

    #[test]
    fn test_noise_between_numbers_is_fine() {
        assert!(is_full_house_complete(
            &small_ticket(),
            &[1, 80, 2, 3, 81, 4, 5, 6]
        ));
    }
}
