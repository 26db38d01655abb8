//! Error types for claim evaluation.
//!
//! A badly shaped ticket is a losing claim
//! ([`crate::Reason::InvalidTicketShape`]), not an error. An unknown game
//! type is a caller bug and surfaces as [`ClaimError`].

/// Error raised when a claim cannot be evaluated at all.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ClaimError {
    /// The game-type tag is not one of the five known patterns.
    #[display("Unknown game type: {:?}", _0)]
    UnknownGameType(String),
}

impl std::error::Error for ClaimError {}

/// Error describing why a grid is not a 3x9 ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ShapeError {
    /// The grid does not have exactly three rows.
    #[display("Ticket must have exactly 3 rows, found {}", _0)]
    RowCount(usize),

    /// A row does not have exactly nine cells.
    #[display("Row {} must have exactly 9 cells, found {}", row, len)]
    RowLength {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        len: usize,
    },
}

impl std::error::Error for ShapeError {}

/// Error raised when a raw value cannot be read as a ticket cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CellError {
    /// The text is neither a number nor the blank marker.
    #[display("Invalid cell {:?}: expected a number or \"-\"", _0)]
    Unrecognized(String),
}

impl std::error::Error for CellError {}
