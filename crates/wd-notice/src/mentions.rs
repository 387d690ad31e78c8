//! Date mentions inside notice sentences: `[YYYY年][M月]D日`.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use wd_time::Weekday;

/// A date, optionally followed by a weekday note such as `（星期六）`.
static MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<date>(?:(?P<year>[0-9]+)年)?(?:(?P<month>[0-9]+)月)?(?P<day>[0-9]+)日)(?:[（(](?P<weekday>星期.)[）)])?",
    )
    .expect("mention pattern is valid")
});

/// The text between two mentions that makes them an inclusive range.
static RANGE_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[至\-—]$").expect("range pattern is valid"));

/// One date mention, with the parts written in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Mention {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: u32,
    /// Weekday written after the date, e.g. `（星期六）`.
    pub weekday: Option<Weekday>,
    /// Byte offsets of the mention (without the weekday note) in the text.
    pub start: usize,
    pub end: usize,
}

impl Mention {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        // Numbers too long for u32 become u32::MAX and fail date validation.
        let number = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        };
        let date = caps.name("date")?;
        Some(Self {
            year: number("year"),
            month: number("month"),
            day: number("day")?,
            weekday: caps
                .name("weekday")
                .and_then(|w| Weekday::from_chinese_name(w.as_str())),
            start: date.start(),
            end: date.end(),
        })
    }
}

/// Find every date mention in `text`, left to right.
pub(crate) fn scan(text: &str) -> Vec<Mention> {
    MENTION
        .captures_iter(text)
        .filter_map(|caps| Mention::from_captures(&caps))
        .collect()
}

/// Pairs of adjacent mentions `(a, b)` written as `A至B`.
pub(crate) fn ranges(text: &str, mentions: &[Mention]) -> Vec<(usize, usize)> {
    mentions
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| RANGE_GAP.is_match(&text[pair[0].end..pair[1].start]))
        .map(|(idx, _)| (idx, idx + 1))
        .collect()
}
