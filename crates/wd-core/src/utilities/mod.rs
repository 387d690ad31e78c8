//! Text conversion helpers.

/// Formatting of calendar days to their canonical text form.
pub mod data_formatters;

/// Parsing of `YYYY-MM-DD` and `YYYY-MM-DD HH:MM` text.
pub mod data_parsers;
