//! `Date` type.
//!
//! Dates are stored as a serial number of days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.
//!
//! A `Date` never carries a time of day.  Conversions from date-time values
//! truncate to the calendar day in the value's own time zone.

use crate::weekday::Weekday;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use wd_core::errors::{Error, Result};
use wd_core::utilities::data_formatters::format_iso_date;
use wd_core::utilities::data_parsers::{parse_iso_date, parse_iso_date_time};
use wd_core::Settings;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial falls outside
    /// [`Date::MIN`]..=[`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a `YYYY-MM-DD` string.
    ///
    /// ```
    /// use wd_time::Date;
    /// let d = Date::parse("2020-02-01").unwrap();
    /// assert_eq!((d.year(), d.month(), d.day_of_month()), (2020, 2, 1));
    /// assert!(Date::parse("2020-02-30").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s).ok_or_else(|| Error::parse(s, "YYYY-MM-DD"))?;
        Self::from_ymd(y, m, d)
    }

    /// Parse a `YYYY-MM-DD HH:MM` string and keep only its calendar day.
    ///
    /// The time of day is validated, then discarded.
    pub fn parse_date_time(s: &str) -> Result<Self> {
        let ((y, m, d), _) =
            parse_iso_date_time(s).ok_or_else(|| Error::parse(s, "YYYY-MM-DD HH:MM"))?;
        Self::from_ymd(y, m, d)
    }

    /// The day the library treats as "today".
    ///
    /// This is the evaluation date from [`Settings`] when one is set, and the
    /// local system date otherwise.
    pub fn today() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Self::from_serial(serial),
            None => Self::try_from(chrono::Local::now()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub const fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        Weekday::from_days_after_monday(self.0 - 1)
    }

    /// Convert to a `chrono::NaiveDate`.
    pub fn to_naive_date(self) -> NaiveDate {
        let (y, m, d) = ymd_from_serial(self.0);
        NaiveDate::from_ymd_opt(y.into(), m.into(), d.into())
            .expect("a Date always holds a real calendar day")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self} + {n} overflows"))
        })?;
        Self::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

/// Const constructor for compiled-in date tables.
///
/// # Panics
/// Panics if the arguments do not name a day in 1900-01-01 ..= 2199-12-31.
/// In a `const` item the panic is a compile error.
pub const fn ymd(year: u16, month: u8, day: u8) -> Date {
    assert!(year >= 1900 && year <= 2199, "year out of range");
    assert!(month >= 1 && month <= 12, "month out of range");
    assert!(day >= 1 && day <= days_in_month(year, month), "day out of range");
    Date(serial_from_ymd(year, month, day))
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: NaiveDate) -> Result<Self> {
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1900, 2199]", d.year())))?;
        // chrono guarantees month in 1..=12 and day in 1..=31
        Self::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

impl TryFrom<NaiveDateTime> for Date {
    type Error = Error;

    fn try_from(dt: NaiveDateTime) -> Result<Self> {
        Self::try_from(dt.date())
    }
}

impl<Tz: TimeZone> TryFrom<DateTime<Tz>> for Date {
    type Error = Error;

    /// Truncate to the calendar day in the value's own time zone.
    fn try_from(dt: DateTime<Tz>) -> Result<Self> {
        Self::try_from(dt.date_naive())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        f.write_str(&format_iso_date(y, m, d))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("month out of range"),
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1900, year); 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + d
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate year, then adjust until serial falls within it
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};
    use wd_core::ScopedEvaluationDate;

    #[test]
    fn test_epoch() {
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap(), Date::MIN);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
        assert_eq!(Date::MIN.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_const_constructor_matches_checked() {
        assert_eq!(ymd(2020, 2, 29), Date::from_ymd(2020, 2, 29).unwrap());
        assert_eq!(ymd(2018, 12, 30), Date::from_ymd(2018, 12, 30).unwrap());
    }

    #[test]
    #[should_panic(expected = "day out of range")]
    fn test_const_constructor_rejects_invalid_day() {
        let _ = ymd(2019, 2, 29);
    }

    #[test]
    fn test_out_of_range() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_ymd(2020, 13, 1).is_err());
        assert!(Date::from_ymd(2019, 2, 29).is_err());
        assert!(Date::from_serial(0).is_err());
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2020-01-01 is a Wednesday
        assert_eq!(ymd(2020, 1, 1).weekday(), Weekday::Wednesday);
        // 2020-02-01 is a Saturday
        assert_eq!(ymd(2020, 2, 1).weekday(), Weekday::Saturday);
        assert_eq!(ymd(2020, 2, 2).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Date::parse("2020-05-09").unwrap(), ymd(2020, 5, 9));
        assert_eq!("2019-10-07".parse::<Date>().unwrap(), ymd(2019, 10, 7));
        assert!(matches!(Date::parse("2020/05/09"), Err(Error::Parse { .. })));
        assert!(matches!(Date::parse("2020-02-30"), Err(Error::Date(_))));
    }

    #[test]
    fn test_parse_date_time_discards_time() {
        let morning = Date::parse_date_time("2020-01-01 00:00").unwrap();
        let evening = Date::parse_date_time("2020-01-01 23:59").unwrap();
        assert_eq!(morning, evening);
        assert_eq!(morning, ymd(2020, 1, 1));
        assert!(Date::parse_date_time("2020-01-01").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ymd(2018, 12, 29).to_string(), "2018-12-29");
        assert_eq!(format!("{:?}", ymd(2020, 10, 8)), "Date(2020-10-08)");
    }

    #[test]
    fn test_chrono_conversions() {
        let naive = NaiveDate::from_ymd_opt(2020, 4, 4).unwrap();
        assert_eq!(Date::try_from(naive).unwrap(), ymd(2020, 4, 4));
        assert_eq!(ymd(2020, 4, 4).to_naive_date(), naive);

        let late = naive.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert_eq!(Date::try_from(late).unwrap(), ymd(2020, 4, 4));

        // 2020-04-04 23:30 at UTC+8 is still the 4th in that zone.
        let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
        let dt = beijing.from_local_datetime(&late).single().unwrap();
        assert_eq!(Date::try_from(dt).unwrap(), ymd(2020, 4, 4));

        let too_early = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
        assert!(Date::try_from(too_early).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = ymd(2020, 1, 31);
        assert_eq!(d + 1, ymd(2020, 2, 1));
        assert_eq!(ymd(2020, 3, 1) - 1, ymd(2020, 2, 29));
        assert_eq!(ymd(2020, 2, 1) - d, 1);
        assert_eq!(d.days_between(ymd(2020, 2, 29)), 29);
    }

    // Only test in this binary touching the settings singleton.
    #[test]
    fn test_today_uses_evaluation_date() {
        let _guard = ScopedEvaluationDate::new(ymd(2020, 5, 9).serial());
        assert_eq!(Date::today().unwrap(), ymd(2020, 5, 9));
    }
}
