//! Strictly Claims library - command-line front end for claim checking
//!
//! Loads claims from TOML files or inline arguments and evaluates them with
//! [`strictly_tambola`].
//!
//! # Example
//!
//! ```
//! use strictly_claims::ClaimFile;
//!
//! # fn example() -> anyhow::Result<()> {
//! let claim = ClaimFile::from_args(
//!     "1,-,2,-,3,-,4,-,5; 6,-,7,-,8,-,9,-,10; 11,-,12,-,13,-,14,-,15",
//!     "1,2,3,4,5",
//!     "top_line",
//! )?;
//! let report = claim.evaluate()?;
//! assert!(report.verdict().is_accepted());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod claim_file;
mod cli;
mod report;

pub mod demo;

// Crate-level exports - Claim input
pub use claim_file::{ClaimFile, ConfigError, parse_announced, parse_ticket};

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Output
pub use report::ClaimReport;
