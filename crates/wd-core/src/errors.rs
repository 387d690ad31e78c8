//! Error types for workday-rs.
//!
//! A single `thiserror`-derived enum shared by every crate in the workspace.

use thiserror::Error;

/// The top-level error type used throughout workday-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date outside the supported range, or not a real calendar day.
    #[error("date error: {0}")]
    Date(String),

    /// Text that does not follow the expected date / date-time layout.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        /// The offending input.
        input: String,
        /// Human-readable description of the expected layout.
        expected: &'static str,
    },
}

impl Error {
    /// Build an [`Error::Parse`] for `input`.
    pub fn parse(input: impl Into<String>, expected: &'static str) -> Self {
        Error::Parse {
            input: input.into(),
            expected,
        }
    }
}

/// Shorthand `Result` type used throughout workday-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;
