//! The closed set of claimable patterns.

use crate::error::ClaimError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// A pattern a player can claim.
///
/// Tags (`top_line`, `middle_line`, ...) are shared by [`FromStr`],
/// [`std::fmt::Display`] and serde.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameType {
    /// Every number on the first row.
    TopLine,
    /// Every number on the second row.
    MiddleLine,
    /// Every number on the third row.
    BottomLine,
    /// Every number on the ticket.
    FullHouse,
    /// Any five numbers on the ticket.
    EarlyFive,
}

impl GameType {
    /// Parses a game-type tag.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::UnknownGameType`] for anything outside the five tags.
    #[instrument]
    pub fn from_tag(tag: &str) -> Result<Self, ClaimError> {
        Self::from_str(tag).map_err(|_| {
            warn!(tag, "Unknown game type");
            ClaimError::UnknownGameType(tag.to_string())
        })
    }

    /// Returns the tag for this pattern.
    pub fn tag(self) -> &'static str {
        self.into()
    }
}
