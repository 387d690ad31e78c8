//! Locating the per-festival arrangements in a notice.
//!
//! Notices list one numbered line per festival, `二、春节：<arrangement>`.
//! Supplementary notices instead carry a heading such as
//! `现将2020年春节假期安排调整如下` followed by numbered lines without a
//! festival name; those lines are attributed to the festival in the heading.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// One festival arrangement: its name and the sentences describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Festival name, e.g. `"春节"` or `"国庆节、中秋节"`.
    pub name: String,
    /// Arrangement text, e.g. `"1月24日至30日放假调休，共7天。"`.
    pub description: String,
}

/// `二、<text>`.
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[一二三四五六七八九十]、(.+)$").expect("item pattern is valid"));

/// `二、<name>：<description>`.
static NUMBERED_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[一二三四五六七八九十]、(.+?)：(.+)$").expect("rule pattern is valid")
});

/// `…2020年<name>假期安排…` / `…2020年<name>放假安排…`, taking the last year
/// and the last marker on the line.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*[0-9]+年(.{2,})(?:假期|放假)安排").expect("heading pattern is valid")
});

static MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+月[0-9]+日").expect("month-day pattern is valid"));

/// Split notice text into distinct, non-empty lines, keeping first
/// occurrences in order.
///
/// Paragraphs copied from the published page are often separated by a double
/// ideographic space instead of a newline; both count as line breaks.
pub fn lines(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    text.split(['\n', '\r'])
        .flat_map(|line| line.split("\u{3000}\u{3000}"))
        .map(str::trim)
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .collect()
}

/// Every arrangement in the notice: numbered festival lines first, then
/// lines attributed through a heading.
pub fn extract_rules(text: &str) -> Vec<Rule> {
    let lines = lines(text);
    let mut rules: Vec<Rule> = lines.iter().filter_map(|l| numbered_rule(l)).collect();

    let mut heading: Option<&str> = None;
    for line in &lines {
        if let Some(name) = heading_name(line) {
            heading = Some(name);
        }
        let Some(name) = heading else { continue };
        if let Some(description) = numbered_item(line).filter(|d| mentions_month_day(d)) {
            rules.push(Rule {
                name: name.to_owned(),
                description: description.to_owned(),
            });
        }
    }

    for rule in &rules {
        debug!(name = %rule.name, description = %rule.description, "arrangement found");
    }
    rules
}

/// Text after a leading `一、` … `十、`.
fn numbered_item(line: &str) -> Option<&str> {
    NUMBERED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `二、春节：…` → name and description.
fn numbered_rule(line: &str) -> Option<Rule> {
    let caps = NUMBERED_RULE.captures(line)?;
    Some(Rule {
        name: caps.get(1)?.as_str().to_owned(),
        description: caps.get(2)?.as_str().to_owned(),
    })
}

/// Festival name from a heading like `…2020年春节假期安排…`.
fn heading_name(line: &str) -> Option<&str> {
    HEADING
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether the text contains `<digits>月<digits>日`.
fn mentions_month_day(text: &str) -> bool {
    MONTH_DAY.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_festival_lines() {
        let rules = extract_rules(
            "国务院办公厅关于2020年部分节假日安排的通知\n\
             一、元旦：2020年1月1日放假，共1天。\n\
             六、国庆节、中秋节：10月1日至8日放假调休，共8天。\n\
             一、元旦：2020年1月1日放假，共1天。\n",
        );
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].name, "元旦");
        assert_eq!(rules[0].description, "2020年1月1日放假，共1天。");
        assert_eq!(rules[1].name, "国庆节、中秋节");
    }

    #[test]
    fn heading_attributed_lines() {
        let rules = extract_rules(
            "国务院办公厅关于延长2020年春节假期的通知\u{3000}\u{3000}\
             经国务院批准，现将延长2020年春节假期安排通知如下：\u{3000}\u{3000}\
             一、延长2020年春节假期至2月2日（农历正月初九，星期日）。\u{3000}\u{3000}\
             二、各地大专院校另行通知。",
        );
        assert_eq!(
            rules,
            vec![Rule {
                name: "春节".into(),
                description: "延长2020年春节假期至2月2日（农历正月初九，星期日）。".into(),
            }]
        );
    }

    #[test]
    fn heading_names() {
        assert_eq!(heading_name("现将2020年春节假期安排通知如下"), Some("春节"));
        assert_eq!(heading_name("现将2019年劳动节放假安排调整如下"), Some("劳动节"));
        assert_eq!(heading_name("2020年节假期安排"), None);
        assert_eq!(heading_name("没有年份的假期安排"), None);
    }

    #[test]
    fn numbered_lines() {
        assert_eq!(numbered_item("三、清明节：4月5日放假"), Some("清明节：4月5日放假"));
        assert_eq!(numbered_item("三、"), None);
        assert_eq!(numbered_item("经国务院批准"), None);
        let rule = numbered_rule("三、清明节：4月5日放假：与周末连休").unwrap();
        assert_eq!(rule.name, "清明节");
        assert_eq!(rule.description, "4月5日放假：与周末连休");
        assert_eq!(numbered_rule("三、：4月5日放假"), None);
    }

    #[test]
    fn month_day_detection() {
        assert!(mentions_month_day("至2月2日"));
        assert!(!mentions_month_day("2月份另行通知"));
        assert!(!mentions_month_day("各地大专院校另行通知"));
    }

    #[test]
    fn lines_split_and_dedupe() {
        assert_eq!(
            lines("a\u{3000}\u{3000}b\n\n a \r\nc"),
            vec!["a", "b", "c"]
        );
    }
}
