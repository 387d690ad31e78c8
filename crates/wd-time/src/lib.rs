//! # wd-time
//!
//! Date, weekday, and holiday calendar types: the [`Calendar`] trait, the
//! weekend-only fallback calendar, and the table-driven [`China`] calendar.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekend-only calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Tables of explicit holidays and make-up workdays.
pub mod special_days;

/// Day of the week.
pub mod weekday;

/// Conventions for rolling a holiday onto a workday.
pub mod workday_convention;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::China;
pub use date::{ymd, Date};
pub use special_days::SpecialDays;
pub use weekday::Weekday;
pub use workday_convention::WorkdayConvention;
