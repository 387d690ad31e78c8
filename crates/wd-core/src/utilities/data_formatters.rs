//! Data formatting helpers.

/// Format a calendar day in its canonical `YYYY-MM-DD` form.
pub fn format_iso_date(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}
