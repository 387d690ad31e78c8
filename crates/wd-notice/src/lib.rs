//! # wd-notice
//!
//! Reads State Council holiday-arrangement notices (国务院办公厅关于…部分节假日
//! 安排的通知) and turns them into the dated entries of a compiled-in
//! holiday table.
//!
//! The crate works on notice text supplied by the caller; it does not fetch
//! anything.  A typical maintenance run:
//!
//! ```
//! use wd_notice::{parse_notice, SpecialDaysSource};
//!
//! let notice = "一、元旦：2020年1月1日放假，共1天。\n\
//!               五、端午节：6月25日至27日放假调休，共3天。6月28日（星期日）上班。";
//! let days = parse_notice(notice, 2020).unwrap();
//! let source = SpecialDaysSource::collect(&days);
//! assert_eq!(source.holidays().len(), 4);
//! println!("{}", source.render_table());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod description;
mod mentions;

/// Notice parsing errors.
pub mod error;

/// Locating festival arrangements in notice text.
pub mod rules;

/// Grouping parsed days into table source.
pub mod table;

pub use error::{NoticeError, Result};
pub use rules::{extract_rules, Rule};
pub use table::SpecialDaysSource;

use tracing::debug;
use wd_time::Date;

/// Whether an announced day is taken off or worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// A day off, whatever its weekday.
    Holiday,
    /// A weekend day worked to make up for a holiday.
    Workday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Holiday => write!(f, "holiday"),
            DayKind::Workday => write!(f, "workday"),
        }
    }
}

/// One dated entry of a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDay {
    /// Festival the entry belongs to.
    pub name: String,
    /// The announced day.
    pub date: Date,
    /// Off or worked.
    pub kind: DayKind,
}

/// Parse the notice published for `year`.
///
/// `year` fills in date mentions written without a year.  Entries come out
/// in notice order; a day repeated within one arrangement is reported once.
pub fn parse_notice(text: &str, year: u16) -> Result<Vec<NoticeDay>> {
    let rules = extract_rules(text);
    if rules.is_empty() {
        return Err(NoticeError::NoRules);
    }

    let mut days = Vec::new();
    for rule in &rules {
        let parsed = description::DescriptionParser::new(&rule.description, year).parse()?;
        debug!(name = %rule.name, count = parsed.len(), "arrangement parsed");
        days.extend(parsed.into_iter().map(|(date, kind)| NoticeDay {
            name: rule.name.clone(),
            date,
            kind,
        }));
    }
    Ok(days)
}
