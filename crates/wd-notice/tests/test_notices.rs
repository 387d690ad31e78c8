//! Parsing the published 2019 and 2020 notices reproduces the compiled-in
//! China table.

use wd_notice::{parse_notice, DayKind, NoticeError, SpecialDaysSource};
use wd_time::calendars::china::SPECIAL_DAYS;
use wd_time::ymd;

const NOTICE_2019: &str = "\
国务院办公厅关于2019年部分节假日安排的通知
经国务院批准，现将2019年元旦、春节、清明节、劳动节、端午节、中秋节和国庆节放假调休日期的具体安排通知如下。
一、元旦：2018年12月30日至2019年1月1日放假调休，共3天。2018年12月29日（星期六）上班。
二、春节：2月4日至10日放假调休，共7天。2月2日（星期六）、2月3日（星期日）上班。
三、清明节：4月5日放假，与周末连休。
四、劳动节：5月1日放假。
五、端午节：6月7日放假，与周末连休。
六、中秋节：9月13日放假，与周末连休。
七、国庆节：10月1日至7日放假调休，共7天。9月29日（星期日）、10月12日（星期六）上班。
节假日期间，各地区、各部门要妥善安排好值班和安全、保卫等工作。
";

const NOTICE_2020: &str = "\
国务院办公厅关于2020年部分节假日安排的通知\u{3000}\u{3000}\
经国务院批准，现将2020年元旦、春节、清明节、劳动节、端午节、国庆节和中秋节放假调休日期的具体安排通知如下。\u{3000}\u{3000}\
一、元旦：2020年1月1日放假，共1天。\u{3000}\u{3000}\
二、春节：1月24日至30日放假调休，共7天。1月19日（星期日）、2月1日（星期六）上班。\u{3000}\u{3000}\
三、清明节：4月4日至6日放假调休，共3天。\u{3000}\u{3000}\
四、劳动节：5月1日至5日放假调休，共5天。4月26日（星期日）、5月9日（星期六）上班。\u{3000}\u{3000}\
五、端午节：6月25日至27日放假调休，共3天。6月28日（星期日）上班。\u{3000}\u{3000}\
六、国庆节、中秋节：10月1日至8日放假调休，共8天。9月27日（星期日）、10月10日（星期六）上班。\u{3000}\u{3000}\
节假日期间，各地区、各部门要妥善安排好值班和安全、保卫等工作。";

const CHINA_SOURCE: &str = include_str!("../../wd-time/src/calendars/china.rs");

fn collect_both() -> SpecialDaysSource {
    let mut days = parse_notice(NOTICE_2019, 2019).unwrap();
    days.extend(parse_notice(NOTICE_2020, 2020).unwrap());
    SpecialDaysSource::collect(&days)
}

#[test]
fn notices_reproduce_the_china_table() {
    let source = collect_both();
    assert_eq!(source.holidays(), SPECIAL_DAYS.holidays());
    assert_eq!(source.workdays(), SPECIAL_DAYS.workdays());
}

#[test]
fn rendered_entries_match_the_china_source() {
    let source = collect_both();
    for kind in [DayKind::Holiday, DayKind::Workday] {
        let rendered = source.render_entries(kind);
        assert!(
            CHINA_SOURCE.contains(&rendered),
            "{kind} entries differ from china.rs:\n{rendered}"
        );
    }
}

#[test]
fn entries_keep_their_festival() {
    let days = parse_notice(NOTICE_2019, 2019).unwrap();
    let new_year: Vec<_> = days.iter().filter(|d| d.name == "元旦").collect();
    assert_eq!(new_year.len(), 4);
    assert!(new_year
        .iter()
        .any(|d| d.date == ymd(2018, 12, 29) && d.kind == DayKind::Workday));
    assert!(new_year
        .iter()
        .any(|d| d.date == ymd(2018, 12, 31) && d.kind == DayKind::Holiday));
    let national: Vec<_> = days.iter().filter(|d| d.name == "国庆节").collect();
    assert_eq!(national.len(), 9);
}

const EXTENSION_2020: &str = "\
国务院办公厅关于调整2020年春节假期的通知
经国务院批准，现将2020年春节假期安排调整如下：
一、2020年1月31日至2月2日放假，2月8日（星期六）上班。
二、各地大专院校推迟开学，具体时间由教育部门另行通知。
";

#[test]
fn heading_attributes_unnamed_items() {
    let days = parse_notice(EXTENSION_2020, 2020).unwrap();
    assert!(days.iter().all(|d| d.name == "春节"));

    let mut holidays: Vec<_> = days
        .iter()
        .filter(|d| d.kind == DayKind::Holiday)
        .map(|d| d.date)
        .collect();
    holidays.sort();
    assert_eq!(
        holidays,
        vec![ymd(2020, 1, 31), ymd(2020, 2, 1), ymd(2020, 2, 2)]
    );
    let workdays: Vec<_> = days
        .iter()
        .filter(|d| d.kind == DayKind::Workday)
        .map(|d| d.date)
        .collect();
    assert_eq!(workdays, vec![ymd(2020, 2, 8)]);
}

#[test]
fn text_without_arrangements_is_rejected() {
    assert_eq!(
        parse_notice("节假日期间，各地区要妥善安排好值班工作。", 2020),
        Err(NoticeError::NoRules)
    );
}
