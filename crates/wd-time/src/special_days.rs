//! Tables of special days: explicit holidays and make-up workdays.
//!
//! A [`SpecialDays`] value is built from two `'static` sorted slices of
//! [`Date`], normally `const` items, so the tables live in read-only memory
//! and need no synchronisation.  [`SpecialDays::new`] is a `const fn` that
//! rejects unsorted input; used in a `const` item, a misplaced entry fails
//! the build.

use crate::date::Date;
use crate::weekday::Weekday;

/// Explicit holidays and make-up workdays overriding the weekend rule.
#[derive(Debug, Clone, Copy)]
pub struct SpecialDays {
    holidays: &'static [Date],
    workdays: &'static [Date],
}

impl SpecialDays {
    /// Build a table from ascending slices.
    ///
    /// Duplicates are allowed, and so is a date present in both slices (the
    /// holiday entry wins, see [`SpecialDays::is_holiday`]).
    ///
    /// # Panics
    /// Panics if either slice is not in ascending order.
    pub const fn new(holidays: &'static [Date], workdays: &'static [Date]) -> Self {
        assert!(is_ascending(holidays), "special holidays must be sorted");
        assert!(is_ascending(workdays), "special workdays must be sorted");
        Self { holidays, workdays }
    }

    /// The explicit holidays, ascending.
    pub fn holidays(&self) -> &'static [Date] {
        self.holidays
    }

    /// The make-up workdays, ascending.
    pub fn workdays(&self) -> &'static [Date] {
        self.workdays
    }

    /// Return `true` if `date` is listed as an explicit holiday.
    pub fn is_special_holiday(&self, date: Date) -> bool {
        self.holidays.binary_search(&date).is_ok()
    }

    /// Return `true` if `date` is listed as a make-up workday.
    pub fn is_special_workday(&self, date: Date) -> bool {
        self.workdays.binary_search(&date).is_ok()
    }

    /// Classify `date`: a holiday if it is listed as one, or if it falls on
    /// a weekend and is not listed as a make-up workday.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.is_special_holiday(date)
            || (matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
                && !self.is_special_workday(date))
    }

    /// Dates listed in both tables.
    ///
    /// Lookups never consult this; it exists so that table maintenance can
    /// check for contradictory entries.
    pub fn conflicts(&self) -> Vec<Date> {
        let mut both: Vec<Date> = self
            .holidays
            .iter()
            .copied()
            .filter(|d| self.is_special_workday(*d))
            .collect();
        both.dedup();
        both
    }

    /// First and last dated entry across both tables, or `None` if empty.
    pub fn coverage(&self) -> Option<(Date, Date)> {
        let first = match (self.holidays.first(), self.workdays.first()) {
            (Some(h), Some(w)) => *h.min(w),
            (Some(d), None) | (None, Some(d)) => *d,
            (None, None) => return None,
        };
        let last = match (self.holidays.last(), self.workdays.last()) {
            (Some(h), Some(w)) => *h.max(w),
            (Some(d), None) | (None, Some(d)) => *d,
            (None, None) => return None,
        };
        Some((first, last))
    }
}

const fn is_ascending(dates: &[Date]) -> bool {
    let mut i = 1;
    while i < dates.len() {
        if dates[i - 1].serial() > dates[i].serial() {
            return false;
        }
        i += 1;
    }
    true
}
