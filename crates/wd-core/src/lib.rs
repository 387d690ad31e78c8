//! # wd-core
//!
//! Core building blocks shared across the workday-rs workspace: the error
//! type, process-wide settings, and the textual date parsers / formatters
//! used at the edges of the library.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// The shared error type.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
