//! Grouping parsed days into the table layout used by compiled-in calendars.

use std::collections::{BTreeMap, BTreeSet};

use wd_time::Date;

use crate::{DayKind, NoticeDay};

/// Entries per rendered source line.
const PER_LINE: usize = 6;

/// Special days collected from one or more notices, grouped per kind and
/// calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialDaysSource {
    holidays: BTreeMap<u16, BTreeSet<Date>>,
    workdays: BTreeMap<u16, BTreeSet<Date>>,
}

impl SpecialDaysSource {
    /// Group `days`, dropping duplicates.
    pub fn collect<'a>(days: impl IntoIterator<Item = &'a NoticeDay>) -> Self {
        let mut source = Self::default();
        source.extend(days);
        source
    }

    /// Sorted holidays across all years.
    pub fn holidays(&self) -> Vec<Date> {
        self.holidays.values().flatten().copied().collect()
    }

    /// Sorted make-up workdays across all years.
    pub fn workdays(&self) -> Vec<Date> {
        self.workdays.values().flatten().copied().collect()
    }

    /// Rust source for the entries of one table, one comment line per year.
    pub fn render_entries(&self, kind: DayKind) -> String {
        let by_year = match kind {
            DayKind::Holiday => &self.holidays,
            DayKind::Workday => &self.workdays,
        };
        let mut out = String::new();
        for (year, dates) in by_year {
            out.push_str(&format!("    // {year}\n"));
            let dates: Vec<&Date> = dates.iter().collect();
            for chunk in dates.chunks(PER_LINE) {
                let line: Vec<String> = chunk
                    .iter()
                    .map(|d| {
                        let (y, m, day) = d.ymd();
                        format!("ymd({y}, {m}, {day}),")
                    })
                    .collect();
                out.push_str(&format!("    {}\n", line.join(" ")));
            }
        }
        out
    }

    /// Rust source for both `HOLIDAYS` and `WORKDAYS` constants.
    pub fn render_table(&self) -> String {
        format!(
            "#[rustfmt::skip]\nconst HOLIDAYS: &[Date] = &[\n{}];\n\n\
             #[rustfmt::skip]\nconst WORKDAYS: &[Date] = &[\n{}];\n",
            self.render_entries(DayKind::Holiday),
            self.render_entries(DayKind::Workday),
        )
    }
}

impl<'a> Extend<&'a NoticeDay> for SpecialDaysSource {
    fn extend<I: IntoIterator<Item = &'a NoticeDay>>(&mut self, days: I) {
        for day in days {
            let target = match day.kind {
                DayKind::Holiday => &mut self.holidays,
                DayKind::Workday => &mut self.workdays,
            };
            target.entry(day.date.year()).or_default().insert(day.date);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_time::ymd;

    fn day(date: Date, kind: DayKind) -> NoticeDay {
        NoticeDay {
            name: "元旦".into(),
            date,
            kind,
        }
    }

    #[test]
    fn groups_by_year_and_renders() {
        let days = [
            day(ymd(2019, 1, 1), DayKind::Holiday),
            day(ymd(2018, 12, 31), DayKind::Holiday),
            day(ymd(2018, 12, 30), DayKind::Holiday),
            day(ymd(2018, 12, 31), DayKind::Holiday),
            day(ymd(2018, 12, 29), DayKind::Workday),
        ];
        let source = SpecialDaysSource::collect(&days);
        assert_eq!(
            source.holidays(),
            vec![ymd(2018, 12, 30), ymd(2018, 12, 31), ymd(2019, 1, 1)]
        );
        assert_eq!(source.workdays(), vec![ymd(2018, 12, 29)]);
        assert_eq!(
            source.render_entries(DayKind::Holiday),
            "    // 2018\n    ymd(2018, 12, 30), ymd(2018, 12, 31),\n    // 2019\n    ymd(2019, 1, 1),\n"
        );
        let table = source.render_table();
        assert!(table.starts_with("#[rustfmt::skip]\nconst HOLIDAYS: &[Date] = &[\n"));
        assert!(table.contains("const WORKDAYS: &[Date] = &[\n    // 2018\n    ymd(2018, 12, 29),\n];\n"));
    }

    #[test]
    fn long_years_wrap() {
        let days: Vec<NoticeDay> = (1..=7)
            .map(|d| day(ymd(2020, 10, d), DayKind::Holiday))
            .collect();
        let rendered = SpecialDaysSource::collect(&days).render_entries(DayKind::Holiday);
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.ends_with("    ymd(2020, 10, 7),\n"));
    }
}
