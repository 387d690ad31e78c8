//! # workday
//!
//! Public holidays and officially rescheduled workdays of mainland China.
//!
//! This crate is a **façade** over the workspace crates.  The two questions
//! most callers ask are answered by [`is_holiday`] and [`is_workday`]:
//!
//! ```rust
//! use workday::{is_holiday, is_workday, Date};
//!
//! // New Year's Day
//! assert!(is_holiday(Date::parse("2020-01-01").unwrap()));
//! // A Saturday worked to make up for the Spring Festival break
//! assert!(is_workday(Date::parse("2020-02-01").unwrap()));
//! // An ordinary Sunday
//! assert!(is_holiday(Date::parse("2020-02-02").unwrap()));
//! ```
//!
//! Dates outside the compiled-in table (see [`China::covers`]) follow the
//! plain weekend rule.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core error definitions, settings, and text parsers.
pub use wd_core as core;

/// Date, weekday, and calendar types.
pub use wd_time as time;

/// Holiday notice parsing for table maintenance.
pub use wd_notice as notice;

pub use wd_core::{Error, Result, ScopedEvaluationDate, Settings};
pub use wd_time::{Calendar, China, Date, Weekday, WeekendsOnly, WorkdayConvention};

use chrono::{DateTime, TimeZone};

/// Return `true` if `date` is a non-working day in mainland China: an
/// announced holiday, or a Saturday/Sunday not announced as a make-up
/// workday.
pub fn is_holiday(date: Date) -> bool {
    China.is_holiday(date)
}

/// Return `true` if `date` is a working day.  Always `!is_holiday(date)`.
pub fn is_workday(date: Date) -> bool {
    China.is_workday(date)
}

/// [`is_holiday`] for a point in time, truncated to its calendar day in its
/// own time zone (pass a `DateTime<Local>` for local-time semantics).
///
/// Fails only for instants outside 1900–2199.
pub fn is_holiday_at<Tz: TimeZone>(instant: DateTime<Tz>) -> Result<bool> {
    Ok(is_holiday(Date::try_from(instant)?))
}

/// [`is_workday`] for a point in time; see [`is_holiday_at`].
pub fn is_workday_at<Tz: TimeZone>(instant: DateTime<Tz>) -> Result<bool> {
    Ok(is_workday(Date::try_from(instant)?))
}

/// Whether today is a holiday, using the evaluation date from [`Settings`]
/// when one is set and the local date otherwise.
pub fn is_holiday_today() -> Result<bool> {
    Ok(is_holiday(Date::today()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};
    use wd_time::ymd;

    #[test]
    fn concrete_scenarios() {
        assert!(is_holiday(ymd(2020, 1, 1)));
        assert!(!is_holiday(ymd(2020, 1, 2)));
        assert!(!is_holiday(ymd(2020, 2, 1)));
        assert!(is_holiday(ymd(2020, 2, 2)));
        assert!(!is_holiday(ymd(2020, 5, 9)));
        assert!(is_workday(ymd(2021, 5, 18)));
    }

    #[test]
    fn instants_truncate_in_their_own_zone() {
        // 2020-01-31 18:00 UTC is already 1 February (a make-up Saturday) in Beijing
        let utc = Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(2020, 1, 31)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
        );
        let beijing = utc.with_timezone(&FixedOffset::east_opt(8 * 3600).unwrap());
        assert_eq!(is_holiday_at(utc), Ok(false));
        assert_eq!(is_workday_at(beijing), Ok(true));
        // 2020-01-30 18:00 UTC is 31 January in Beijing, a workday after the break
        let eve = utc - chrono::Duration::days(1);
        assert_eq!(is_holiday_at(eve), Ok(true));
        assert_eq!(is_holiday_at(eve.with_timezone(&FixedOffset::east_opt(8 * 3600).unwrap())), Ok(false));
    }

    #[test]
    fn today_follows_the_evaluation_date() {
        let _guard = ScopedEvaluationDate::new(ymd(2020, 10, 1).serial());
        assert_eq!(is_holiday_today(), Ok(true));
    }
}
