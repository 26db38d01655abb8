//! Core domain types for tambola tickets.

use crate::contracts::WellShaped;
use crate::error::{CellError, ShapeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of rows on a ticket.
pub const TICKET_ROWS: usize = 3;

/// Number of cells in each ticket row.
pub const TICKET_COLUMNS: usize = 9;

/// Placeholder accepted in text and serialized input for a blank cell.
pub const BLANK_MARKER: &str = "-";

/// A single position on a ticket.
///
/// At the raw-data boundary a blank is written as `0` (the canonical
/// sentinel) or as the [`BLANK_MARKER`]. Both read back as [`Cell::Blank`].
/// Use [`Cell::is_blank`] rather than matching on the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub enum Cell {
    /// A playable number.
    Number(u32),
    /// No number at this position.
    Blank,
}

impl Cell {
    /// Returns true if the cell holds no playable number.
    ///
    /// `Number(0)` counts as blank so that the zero sentinel can never be
    /// crossed by an announcement of `0`.
    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank | Cell::Number(0))
    }

    /// Returns the playable number, if any.
    pub fn number(self) -> Option<u32> {
        match self {
            Cell::Number(n) if !self.is_blank() => Some(n),
            _ => None,
        }
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        if n == 0 { Cell::Blank } else { Cell::Number(n) }
    }
}

impl FromStr for Cell {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == BLANK_MARKER {
            return Ok(Cell::Blank);
        }
        s.parse::<u32>()
            .map(Cell::from)
            .map_err(|_| CellError::Unrecognized(s.to_string()))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number() {
            Some(n) => f.pad(&n.to_string()),
            None => f.pad(BLANK_MARKER),
        }
    }
}

/// Serialized form of a cell: an integer or the blank marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Number(u32),
    Marker(String),
}

impl TryFrom<RawCell> for Cell {
    type Error = CellError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        match raw {
            RawCell::Number(n) => Ok(Cell::from(n)),
            RawCell::Marker(s) => s.parse(),
        }
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        RawCell::Number(cell.number().unwrap_or(0))
    }
}

/// One of the three ticket rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum RowPosition {
    /// First row (index 0).
    Top,
    /// Second row (index 1).
    Middle,
    /// Third row (index 2).
    Bottom,
}

impl RowPosition {
    /// All rows, top to bottom.
    pub const ALL: [RowPosition; TICKET_ROWS] =
        [RowPosition::Top, RowPosition::Middle, RowPosition::Bottom];

    /// Converts the row to its grid index (0-2).
    pub fn to_index(self) -> usize {
        match self {
            RowPosition::Top => 0,
            RowPosition::Middle => 1,
            RowPosition::Bottom => 2,
        }
    }
}

/// A validated 3x9 tambola ticket.
///
/// Tickets are immutable; shape is checked once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Ticket {
    rows: [[Cell; TICKET_COLUMNS]; TICKET_ROWS],
}

impl Ticket {
    /// Builds a ticket from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] unless there are exactly 3 rows of 9 cells.
    #[instrument(skip(rows), fields(row_count = rows.len()))]
    pub fn new<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, ShapeError> {
        WellShaped::check(rows)?;

        let mut grid = [[Cell::Blank; TICKET_COLUMNS]; TICKET_ROWS];
        for (dst, src) in grid.iter_mut().zip(rows) {
            dst.copy_from_slice(src.as_ref());
        }
        Ok(Self { rows: grid })
    }

    /// Builds a ticket from raw numbers, with `0` marking blanks.
    pub fn from_numbers(numbers: [[u32; TICKET_COLUMNS]; TICKET_ROWS]) -> Self {
        Self {
            rows: numbers.map(|row| row.map(Cell::from)),
        }
    }

    /// Returns all rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; TICKET_COLUMNS]; TICKET_ROWS] {
        &self.rows
    }

    /// Returns a single row.
    pub fn row(&self, position: RowPosition) -> &[Cell; TICKET_COLUMNS] {
        &self.rows[position.to_index()]
    }

    /// Iterates over the playable numbers in row-major order.
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flatten().filter_map(|cell| cell.number())
    }

    /// Formats the ticket as a human-readable grid.
    pub fn display(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{:>2}", cell))
                    .collect::<Vec<_>>()
                    .join(" |")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Ticket {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::new(&rows)
    }
}

impl From<Ticket> for Vec<Vec<Cell>> {
    fn from(ticket: Ticket) -> Self {
        ticket.rows.iter().map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_marker_are_blank() {
        assert!(Cell::from(0).is_blank());
        assert!(Cell::Number(0).is_blank());
        assert_eq!("-".parse::<Cell>(), Ok(Cell::Blank));
        assert_eq!("0".parse::<Cell>(), Ok(Cell::Blank));
        assert_eq!(Cell::Number(0).number(), None);
    }

    #[test]
    fn test_parse_number_cell() {
        assert_eq!(" 42 ".parse::<Cell>(), Ok(Cell::Number(42)));
        assert!(matches!(
            "x".parse::<Cell>(),
            Err(CellError::Unrecognized(s)) if s == "x"
        ));
    }

    #[test]
    fn test_new_rejects_wrong_row_count() {
        let rows = vec![vec![Cell::Blank; 9]; 2];
        assert_eq!(Ticket::new(&rows), Err(ShapeError::RowCount(2)));
    }

    #[test]
    fn test_new_rejects_short_row() {
        let rows = vec![vec![Cell::Blank; 9], vec![Cell::Blank; 8], vec![Cell::Blank; 9]];
        assert_eq!(
            Ticket::new(&rows),
            Err(ShapeError::RowLength { row: 1, len: 8 })
        );
    }

    #[test]
    fn test_numbers_skip_blanks() {
        let ticket = Ticket::from_numbers([
            [1, 0, 2, 0, 3, 0, 4, 0, 5],
            [6, 0, 7, 0, 8, 0, 9, 0, 10],
            [11, 0, 12, 0, 13, 0, 14, 0, 15],
        ]);
        let numbers: Vec<u32> = ticket.numbers().collect();
        assert_eq!(numbers, (1..=15).collect::<Vec<_>>());
        assert_eq!(ticket.row(RowPosition::Middle)[0], Cell::Number(6));
    }

    #[test]
    fn test_display_marks_blanks() {
        let ticket = Ticket::from_numbers([[1, 0, 0, 0, 0, 0, 0, 0, 90]; 3]);
        let first_line = ticket.display().lines().next().map(str::to_string);
        assert_eq!(
            first_line.as_deref(),
            Some(" 1 | - | - | - | - | - | - | - |90")
        );
    }
}
