//! Data parsing helpers.
//!
//! Parse calendar days from their textual representations.  Only the layout
//! is checked here; whether the numbers form a real calendar day is decided
//! by the date type that consumes them.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Leading and trailing whitespace is ignored.  The year must have four
/// digits, month and day two digits each.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let year = fixed_digits(parts.next()?, 4)?;
    let month = fixed_digits(parts.next()?, 2)?;
    let day = fixed_digits(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year as u16, month as u8, day as u8))
}

/// Parse a date-time string of the form `YYYY-MM-DD HH:MM`.
///
/// Returns `((year, month, day), (hour, minute))` on success.  Hours run
/// 0–23 and minutes 0–59.
pub fn parse_iso_date_time(s: &str) -> Option<((u16, u8, u8), (u8, u8))> {
    let (date, time) = s.trim().split_once(' ')?;
    let ymd = parse_iso_date(date)?;
    let (hour, minute) = time.split_once(':')?;
    let hour = fixed_digits(hour, 2)?;
    let minute = fixed_digits(minute, 2)?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((ymd, (hour as u8, minute as u8)))
}

fn fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
