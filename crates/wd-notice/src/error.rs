//! Notice parsing errors.

use thiserror::Error;
use wd_time::Date;

/// Result type for notice parsing.
pub type Result<T, E = NoticeError> = std::result::Result<T, E>;

/// Errors raised while reading a holiday notice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoticeError {
    /// The text contains no recognisable holiday arrangement.
    #[error("no holiday arrangement found in notice text")]
    NoRules,

    /// A sentence announcing days off or working days names no date.
    #[error("no date found in {0:?}")]
    NoDates(String),

    /// A day-only mention (`5日`) appears before any mention with a month.
    #[error("{0:?} has no month and no earlier date to take it from")]
    MissingMonth(String),

    /// A date range whose end precedes its start.
    #[error("date range {start} to {end} runs backwards")]
    ReversedRange {
        /// First day of the range.
        start: Date,
        /// Last day of the range.
        end: Date,
    },

    /// A mention that does not name a real calendar day.
    #[error(transparent)]
    Date(#[from] wd_core::Error),
}
