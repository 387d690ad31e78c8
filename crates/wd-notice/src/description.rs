//! Sentence-level reading of one arrangement, e.g.
//! `1月24日至30日放假调休，共7天。1月19日（星期日）、2月1日（星期六）上班。`

use std::sync::LazyLock;

use regex::Regex;
use tracing::{trace, warn};
use wd_time::Date;

use crate::error::{NoticeError, Result};
use crate::mentions::{self, Mention};
use crate::DayKind;

const SENTENCE_BREAKS: [char; 3] = ['，', '。', '；'];

/// Dates followed by day-off keywords and an optional `N天`.
static REST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)(?:放假|补休|调休|公休)+(?:[0-9]+天)?$").expect("rest pattern is valid")
});

/// Dates followed by `上班`.
static WORK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)上班$").expect("work pattern is valid"));

/// `A调至B`: A is worked, B is taken off.
static SHIFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)调至(.+)$").expect("shift pattern is valid"));

/// Reads the dated days out of one arrangement description.
///
/// Month and year of partial mentions are taken from the dates already read
/// in the same description, so one parser is used per description.
pub(crate) struct DescriptionParser<'a> {
    description: &'a str,
    year: u16,
    history: Vec<Date>,
    /// Last date written in the text; range fill-ins do not count.
    last_mention: Option<Date>,
}

impl<'a> DescriptionParser<'a> {
    pub fn new(description: &'a str, year: u16) -> Self {
        Self {
            description,
            year,
            history: Vec::new(),
            last_mention: None,
        }
    }

    pub fn parse(mut self) -> Result<Vec<(Date, DayKind)>> {
        let description = self.description;
        let mut days = Vec::new();
        for sentence in description.split(SENTENCE_BREAKS) {
            self.sentence(sentence, &mut days)?;
        }
        if self.history.is_empty() {
            return Err(NoticeError::NoDates(description.to_owned()));
        }
        Ok(days)
    }

    fn sentence(&mut self, sentence: &str, days: &mut Vec<(Date, DayKind)>) -> Result<()> {
        let mut classified = false;
        if let Some(dates) = rest_part(sentence) {
            classified = true;
            for d in self.extract(dates)? {
                days.push((d, DayKind::Holiday));
            }
        }
        if let Some(dates) = capture(&WORK, sentence) {
            classified = true;
            for d in self.extract(dates)? {
                days.push((d, DayKind::Workday));
            }
        }
        if let Some((from, to)) = shift_parts(sentence) {
            classified = true;
            for d in self.extract(from)? {
                days.push((d, DayKind::Workday));
            }
            for d in self.extract(to)? {
                days.push((d, DayKind::Holiday));
            }
        }
        if !classified {
            trace!(sentence, "sentence skipped");
        }
        Ok(())
    }

    /// New dates mentioned in `text`, ranges expanded.
    fn extract(&mut self, text: &str) -> Result<Vec<Date>> {
        let found = mentions::scan(text);
        if found.is_empty() {
            return Err(NoticeError::NoDates(text.to_owned()));
        }

        let mut resolved = Vec::with_capacity(found.len());
        let mut fresh = Vec::new();
        for mention in &found {
            let date = self.resolve(mention, text)?;
            if let Some(written) = mention.weekday {
                if written != date.weekday() {
                    warn!(
                        mention = mention.text(text),
                        %date,
                        written = %written,
                        actual = %date.weekday(),
                        "weekday note does not match date"
                    );
                }
            }
            self.remember(date, &mut fresh);
            self.last_mention = Some(date);
            resolved.push(date);
        }

        for (a, b) in mentions::ranges(text, &found) {
            let (start, end) = (resolved[a], resolved[b]);
            if end < start {
                return Err(NoticeError::ReversedRange { start, end });
            }
            let mut d = start;
            while d < end {
                d = d.add_days(1)?;
                self.remember(d, &mut fresh);
            }
        }

        trace!(text, count = fresh.len(), "dates extracted");
        Ok(fresh)
    }

    fn remember(&mut self, date: Date, fresh: &mut Vec<Date>) {
        if !self.history.contains(&date) {
            self.history.push(date);
            fresh.push(date);
        }
    }

    /// Fill in the missing parts of a mention.
    ///
    /// A missing month is the month of the previous written date.  A missing year is
    /// the notice year, except for a December date following only dates
    /// before 1 February, which belongs to the previous year (New Year
    /// arrangements spanning the turn of the year).
    fn resolve(&self, mention: &Mention, text: &str) -> Result<Date> {
        let month = match (mention.month, self.last_mention) {
            (Some(m), _) => m,
            (None, Some(prev)) => u32::from(prev.month()),
            (None, None) => return Err(NoticeError::MissingMonth(mention.text(text).to_owned())),
        };
        let year = match mention.year {
            Some(y) => y,
            None => {
                let early = Date::from_ymd(self.year, 2, 1)?;
                let spills_back = month == 12
                    && self.history.iter().max().is_some_and(|latest| *latest < early);
                u32::from(self.year) - u32::from(spills_back)
            }
        };
        let date = Date::from_ymd(
            u16::try_from(year).unwrap_or(u16::MAX),
            u8::try_from(month).unwrap_or(u8::MAX),
            u8::try_from(mention.day).unwrap_or(u8::MAX),
        )?;
        Ok(date)
    }
}

/// First capture group of `re` in `sentence`.
fn capture<'s>(re: &Regex, sentence: &'s str) -> Option<&'s str> {
    re.captures(sentence)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The date part of a sentence ending in a day-off keyword, e.g.
/// `4月4日至6日放假调休` or `5月1日放假3天`.
fn rest_part(sentence: &str) -> Option<&str> {
    capture(&REST, sentence)
}

/// The two sides of `A调至B`.
fn shift_parts(sentence: &str) -> Option<(&str, &str)> {
    let caps = SHIFT.captures(sentence)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
