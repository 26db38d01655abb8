//! Claim input for the command line: TOML files and inline arguments.

use crate::report::ClaimReport;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tambola::{Cell, ClaimError, GameType, assess};
use tracing::{debug, info, instrument};

/// A claim as supplied by the caller, before any validation.
///
/// The ticket is kept as raw rows so that a badly shaped grid reaches the
/// dispatcher and is rejected there, and the game type is kept as its tag so
/// that an unknown tag surfaces as [`ClaimError`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClaimFile {
    /// Game-type tag (`top_line`, `full_house`, ...).
    game_type: String,

    /// Numbers announced so far, in call order.
    #[serde(default)]
    announced: Vec<u32>,

    /// Ticket rows; `0` or `"-"` mark blanks.
    ticket: Vec<Vec<Cell>>,
}

impl ClaimFile {
    /// Creates a claim from its parts.
    #[instrument(skip(announced, ticket), fields(game_type = %game_type))]
    pub fn new(game_type: String, announced: Vec<u32>, ticket: Vec<Vec<Cell>>) -> Self {
        Self {
            game_type,
            announced,
            ticket,
        }
    }

    /// Loads a claim from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading claim from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read claim file: {}", e))
        })?;

        let claim: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse claim file: {}", e)))?;

        info!(game_type = %claim.game_type, announced = claim.announced.len(), "Claim loaded");
        Ok(claim)
    }

    /// Builds a claim from inline command-line text.
    ///
    /// Rows are separated by `;` and cells by `,`. Announced numbers are
    /// separated by `,`.
    #[instrument]
    pub fn from_args(ticket: &str, announced: &str, game_type: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(
            game_type.to_string(),
            parse_announced(announced)?,
            parse_ticket(ticket)?,
        ))
    }

    /// Evaluates the claim.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::UnknownGameType`] if the tag is not a known pattern.
    #[instrument(skip(self), fields(game_type = %self.game_type))]
    pub fn evaluate(&self) -> Result<ClaimReport, ClaimError> {
        let game_type = GameType::from_tag(&self.game_type)?;
        let assessment = assess(&self.ticket, &self.announced, game_type);
        Ok(ClaimReport::new(game_type, assessment, self.announced.len()))
    }
}

/// Parses ticket rows written as `1,-,2,...;6,0,7,...;...`.
#[instrument]
pub fn parse_ticket(text: &str) -> Result<Vec<Vec<Cell>>, ConfigError> {
    text.split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(index, row)| {
            row.split(',')
                .map(|cell| {
                    cell.parse::<Cell>().map_err(|e| {
                        ConfigError::new(format!("Ticket row {}: {}", index, e))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Parses announced numbers written as `1,2,3`.
#[instrument]
pub fn parse_announced(text: &str) -> Result<Vec<u32>, ConfigError> {
    text.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| {
            n.parse::<u32>()
                .map_err(|e| ConfigError::new(format!("Invalid announced number {:?}: {}", n, e)))
        })
        .collect()
}

/// Claim input error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ticket_rows_and_markers() {
        let rows = parse_ticket("1,-,2; 3,0,4 ;").expect("valid ticket text");
        assert_eq!(
            rows,
            vec![
                vec![Cell::Number(1), Cell::Blank, Cell::Number(2)],
                vec![Cell::Number(3), Cell::Blank, Cell::Number(4)],
            ]
        );
    }

    #[test]
    fn test_parse_ticket_reports_row() {
        let err = parse_ticket("1,2;3,x").expect_err("x is not a cell");
        assert!(err.message.contains("Ticket row 1"));
    }

    #[test]
    fn test_parse_announced() {
        let announced = parse_announced(" 1, 2 ,3,").expect("valid numbers");
        assert_eq!(announced, vec![1, 2, 3]);
        assert!(parse_announced("").is_ok_and(|n| n.is_empty()));
        assert!(parse_announced("1,-1").is_err());
    }
}
