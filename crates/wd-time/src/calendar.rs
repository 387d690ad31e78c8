//! `Calendar` trait and the weekend-only calendar.
//!
//! A calendar knows which dates are holidays; every other date is a workday.
//! Date rolling ([`Calendar::adjust`], [`Calendar::advance_workdays`]) is
//! provided on top of that single predicate.

use crate::date::Date;
use crate::weekday::Weekday;
use crate::workday_convention::WorkdayConvention;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"China"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a non-working day in this calendar.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a working day.  Always `!is_holiday(date)`.
    fn is_workday(&self, date: Date) -> bool {
        !self.is_holiday(date)
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    ///
    /// This is about the day of the week only: a weekend day may still be a
    /// workday in calendars with make-up working days.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Adjust `date` according to the given workday convention.
    ///
    /// # Panics
    /// Panics if rolling leaves the supported date range.
    fn adjust(&self, mut date: Date, convention: WorkdayConvention) -> Date {
        match convention {
            WorkdayConvention::Unadjusted => date,
            WorkdayConvention::Following => {
                while self.is_holiday(date) {
                    date += 1;
                }
                date
            }
            WorkdayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, WorkdayConvention::Following);
                if adjusted.month() != date.month() {
                    self.adjust(date, WorkdayConvention::Preceding)
                } else {
                    adjusted
                }
            }
            WorkdayConvention::Preceding => {
                while self.is_holiday(date) {
                    date -= 1;
                }
                date
            }
            WorkdayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, WorkdayConvention::Preceding);
                if adjusted.month() != date.month() {
                    self.adjust(date, WorkdayConvention::Following)
                } else {
                    adjusted
                }
            }
            WorkdayConvention::Nearest => {
                if self.is_workday(date) {
                    return date;
                }
                let fwd = self.adjust(date, WorkdayConvention::Following);
                let bwd = self.adjust(date, WorkdayConvention::Preceding);
                if fwd - date <= date - bwd {
                    fwd
                } else {
                    bwd
                }
            }
        }
    }

    /// Advance `date` by `n` workdays (backwards if `n` is negative).
    ///
    /// With `n == 0` the date is returned unchanged, even if it is a holiday.
    fn advance_workdays(&self, mut date: Date, n: i32) -> Date {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date += step;
            if self.is_workday(date) {
                remaining -= 1;
            }
        }
        date
    }

    /// Count the number of workdays between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn workdays_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start;
        while d < end {
            d += 1;
            if self.is_workday(d) {
                count += 1;
            }
        }
        sign * count
    }

    /// List the holidays in `[from, to]`.
    ///
    /// Ordinary weekends are skipped unless `include_weekends` is set; a
    /// weekend day that is also an explicit holiday is always listed.
    fn holidays_between(&self, from: Date, to: Date, include_weekends: bool) -> Vec<Date> {
        collect_days(from, to, |d| {
            self.is_holiday(d) && (include_weekends || !self.is_weekend(d))
        })
    }
}

/// A calendar that treats only Saturdays and Sundays as holidays, with no
/// special days.
///
/// This is the rule every table-driven calendar falls back to outside the
/// years its table covers.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.is_weekend(date)
    }
}

/// Collect every date in `[from, to]` satisfying `pred`.
pub(crate) fn collect_days(from: Date, to: Date, mut pred: impl FnMut(Date) -> bool) -> Vec<Date> {
    let mut days = Vec::new();
    if from > to {
        return days;
    }
    let mut d = from;
    loop {
        if pred(d) {
            days.push(d);
        }
        if d == to {
            break;
        }
        d += 1;
    }
    days
}
