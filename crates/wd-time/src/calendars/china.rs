//! China calendar: public holidays and make-up workdays.
//!
//! Chinese public holidays (Spring Festival, Qingming, Dragon Boat,
//! Mid-Autumn) follow the lunar calendar, and the State Council announces
//! each year which days are off and which weekend days are worked instead.
//! Those announcements are compiled into the tables below; nothing is
//! computed.
//!
//! The tables cover the 2019 and 2020 announcements, including the
//! December 2018 days of the 2019 New Year arrangement.  Outside that range
//! only the weekend rule applies.  New years are added by appending the
//! entries rendered by the `wd-notice` crate from the announcement text.

use crate::calendar::Calendar;
use crate::date::{ymd, Date};
use crate::special_days::SpecialDays;

/// Explicit non-working days, whatever their weekday.
#[rustfmt::skip]
const HOLIDAYS: &[Date] = &[
    // 2018
    ymd(2018, 12, 30), ymd(2018, 12, 31),
    // 2019
    ymd(2019, 1, 1), ymd(2019, 2, 4), ymd(2019, 2, 5), ymd(2019, 2, 6), ymd(2019, 2, 7), ymd(2019, 2, 8),
    ymd(2019, 2, 9), ymd(2019, 2, 10), ymd(2019, 4, 5), ymd(2019, 5, 1), ymd(2019, 6, 7), ymd(2019, 9, 13),
    ymd(2019, 10, 1), ymd(2019, 10, 2), ymd(2019, 10, 3), ymd(2019, 10, 4), ymd(2019, 10, 5), ymd(2019, 10, 6),
    ymd(2019, 10, 7),
    // 2020
    ymd(2020, 1, 1), ymd(2020, 1, 24), ymd(2020, 1, 25), ymd(2020, 1, 26), ymd(2020, 1, 27), ymd(2020, 1, 28),
    ymd(2020, 1, 29), ymd(2020, 1, 30), ymd(2020, 4, 4), ymd(2020, 4, 5), ymd(2020, 4, 6), ymd(2020, 5, 1),
    ymd(2020, 5, 2), ymd(2020, 5, 3), ymd(2020, 5, 4), ymd(2020, 5, 5), ymd(2020, 6, 25), ymd(2020, 6, 26),
    ymd(2020, 6, 27), ymd(2020, 10, 1), ymd(2020, 10, 2), ymd(2020, 10, 3), ymd(2020, 10, 4), ymd(2020, 10, 5),
    ymd(2020, 10, 6), ymd(2020, 10, 7), ymd(2020, 10, 8),
];

/// Saturdays and Sundays worked to make up for a holiday.
#[rustfmt::skip]
const WORKDAYS: &[Date] = &[
    // 2018
    ymd(2018, 12, 29),
    // 2019
    ymd(2019, 2, 2), ymd(2019, 2, 3), ymd(2019, 9, 29), ymd(2019, 10, 12),
    // 2020
    ymd(2020, 1, 19), ymd(2020, 2, 1), ymd(2020, 4, 26), ymd(2020, 5, 9), ymd(2020, 6, 28), ymd(2020, 9, 27),
    ymd(2020, 10, 10),
];

/// Special days of the China calendar.
pub const SPECIAL_DAYS: SpecialDays = SpecialDays::new(HOLIDAYS, WORKDAYS);

/// China (mainland) public-holiday calendar.
///
/// A date is a holiday if it is one of the announced holidays, or if it is a
/// Saturday or Sunday that was not announced as a make-up workday.
#[derive(Debug, Clone, Copy, Default)]
pub struct China;

impl China {
    /// The compiled-in table of special days.
    pub fn special_days(&self) -> &'static SpecialDays {
        &SPECIAL_DAYS
    }

    /// Return `true` if the table speaks for `date`: it lies between the
    /// first table entry and the end of the last covered year.
    ///
    /// For other dates the classification is the plain weekend rule.
    pub fn covers(&self, date: Date) -> bool {
        match SPECIAL_DAYS.coverage() {
            Some((first, last)) => first <= date && date.year() <= last.year(),
            None => false,
        }
    }
}

impl Calendar for China {
    fn name(&self) -> &str {
        "China"
    }

    fn is_holiday(&self, date: Date) -> bool {
        SPECIAL_DAYS.is_holiday(date)
    }

    fn holidays_between(&self, from: Date, to: Date, include_weekends: bool) -> Vec<Date> {
        crate::calendar::collect_days(from, to, |d| {
            self.is_holiday(d)
                && (include_weekends || !self.is_weekend(d) || SPECIAL_DAYS.is_special_holiday(d))
        })
    }
}
