//! Strictly Tambola - claim validation for tambola tickets
//!
//! Decides whether a player's claim (a line, the full house, or an early
//! five) is valid at the moment it is made. Claims are only valid on the
//! announcement that completes the pattern; a claim made after a later
//! announcement is rejected.
//!
//! # Architecture
//!
//! - **Ticket**: validated 3x9 grid of numbers and blanks
//! - **Contracts**: ticket-shape precondition
//! - **Rules**: pure, total predicates per pattern
//! - **Claim**: dispatcher from game type to rule, plus verdict mapping
//!
//! # Example
//!
//! ```
//! use strictly_tambola::{Ticket, Verdict, evaluate_claim};
//!
//! let ticket = Ticket::from_numbers([
//!     [1, 0, 2, 0, 3, 0, 4, 0, 5],
//!     [6, 0, 7, 0, 8, 0, 9, 0, 10],
//!     [11, 0, 12, 0, 13, 0, 14, 0, 15],
//! ]);
//!
//! let verdict = evaluate_claim(ticket.rows(), &[1, 2, 3, 4, 5], "top_line")?;
//! assert_eq!(verdict, Verdict::Accepted);
//! assert_eq!(verdict.to_string(), "Accepted");
//! # Ok::<(), strictly_tambola::ClaimError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod claim;
mod contracts;
mod error;
mod game_type;
mod ticket;
mod verdict;

#[cfg(kani)]
mod verification;

pub mod rules;

// Crate-level exports - Ticket model
pub use ticket::{BLANK_MARKER, Cell, RowPosition, TICKET_COLUMNS, TICKET_ROWS, Ticket};

// Crate-level exports - Preconditions
pub use contracts::{WellShaped, check_ticket_shape};

// Crate-level exports - Rules
pub use rules::{
    EARLY_FIVE_TARGET, assess_early_five, assess_full_house, assess_line, is_early_five_complete,
    is_full_house_complete, is_line_complete,
};

// Crate-level exports - Dispatch
pub use claim::{Claim, assess, assess_claim, evaluate, evaluate_claim};
pub use game_type::GameType;
pub use verdict::{Assessment, Reason, Verdict};

// Crate-level exports - Errors
pub use error::{CellError, ClaimError, ShapeError};
