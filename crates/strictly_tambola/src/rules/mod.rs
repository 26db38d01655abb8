//! Claim rules for tambola patterns.
//!
//! Pure predicates over a grid and the announced sequence. Each rule has a
//! structured `assess_*` form and a boolean `is_*_complete` form. All rules
//! are total: any grid shape and any sequence yields an answer.

pub mod early_five;
pub mod full_house;
pub mod immediacy;
pub mod line;

pub use early_five::{EARLY_FIVE_TARGET, assess_early_five, is_early_five_complete};
pub use full_house::{assess_full_house, is_full_house_complete};
pub use immediacy::{assess_required, is_immediate_claim};
pub use line::{assess_line, is_line_complete};
