//! End-to-end tests for card construction and the localized accessors.

use chrono::NaiveDate;
use cnid::{CardError, FormatError, IdentityCard, Locale, LocaleError};

const SAMPLE: &str = "350521199010211013";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

// --- check ---

#[test]
fn check_accepts_valid_and_rejects_invalid() {
    assert!(IdentityCard::check(SAMPLE));
    assert!(IdentityCard::check("11010519491231002X"));
    assert!(IdentityCard::check("11010519491231002x"));
    assert!(!IdentityCard::check(""));
    assert!(!IdentityCard::check("35052119901021101"));
    assert!(!IdentityCard::check("350521199010211014"));
    assert!(!IdentityCard::check("990101199001010019"));
}

// --- construction ---

#[test]
fn make_rejects_malformed_numbers() {
    let err = IdentityCard::make("350521199010211014", Locale::ZhCn).unwrap_err();
    assert!(matches!(err, CardError::Format(FormatError::ChecksumMismatch { .. })));
}

#[test]
fn make_with_tag_normalizes_the_tag() {
    let card = IdentityCard::make_with_tag(SAMPLE, "ZH_CN").expect("normalized tag");
    assert_eq!(card.locale(), Locale::ZhCn);
    let card = IdentityCard::make_with_tag(SAMPLE, " en-US ").expect("normalized tag");
    assert_eq!(card.locale(), Locale::EnUs);
}

#[test]
fn make_with_tag_rejects_unknown_tags() {
    let err = IdentityCard::make_with_tag(SAMPLE, "fr-FR").unwrap_err();
    assert!(matches!(
        err,
        CardError::Locale(LocaleError::Unsupported { tag }) if tag == "fr-FR"
    ));
}

#[test]
fn format_errors_win_over_locale_errors() {
    let err = IdentityCard::make_with_tag("not a number", "fr-FR").unwrap_err();
    assert!(matches!(err, CardError::Format(FormatError::InvalidLength { .. })));
}

#[test]
fn default_locale_is_simplified_chinese() {
    let card = IdentityCard::make(SAMPLE, Locale::default()).expect("valid card");
    assert_eq!(card.locale(), Locale::ZhCn);
    assert_eq!(card.gender(), "男");
}

// --- localized accessors ---

#[test]
fn decodes_the_sample_in_chinese() {
    let card = IdentityCard::make(SAMPLE, Locale::ZhCn).expect("valid card");
    assert_eq!(card.province(), Some("福建省"));
    assert_eq!(card.city(), Some("泉州市"));
    assert_eq!(card.county(), Some("惠安县"));
    assert_eq!(card.area(" "), "福建省 泉州市 惠安县");
    assert_eq!(card.area(""), "福建省泉州市惠安县");
    assert_eq!(card.gender(), "男");
    assert_eq!(card.birthday(), "1990-10-21");
    assert_eq!(card.zodiac(), "马");
    assert_eq!(card.constellation(), "天秤座");
    assert_eq!(card.age_on(date(2019, 12, 24)), 29);
}

#[test]
fn decodes_the_sample_in_english() {
    let card = IdentityCard::make(SAMPLE, Locale::EnUs).expect("valid card");
    assert_eq!(card.province(), Some("Fujian Sheng"));
    assert_eq!(card.city(), Some("Quanzhou Shi"));
    assert_eq!(card.county(), Some("Huian Xian"));
    assert_eq!(card.area(" "), "Fujian Sheng Quanzhou Shi Huian Xian");
    assert_eq!(card.gender(), "Male");
    assert_eq!(card.zodiac(), "Horse");
    assert_eq!(card.constellation(), "Libra");
}

#[test]
fn decodes_a_municipality_card() {
    let card = IdentityCard::make("11010519491231002X", Locale::ZhCn).expect("valid card");
    assert_eq!(card.province(), Some("北京市"));
    assert_eq!(card.city(), Some("市辖区"));
    assert_eq!(card.county(), Some("朝阳区"));
    assert_eq!(card.gender(), "女");
    assert_eq!(card.birthday(), "1949-12-31");
    assert_eq!(card.zodiac(), "牛");
    assert_eq!(card.constellation(), "魔羯座");
}

#[test]
fn unlisted_county_leaves_a_gap_in_the_area() {
    let card = IdentityCard::make("350599199010210010", Locale::ZhCn).expect("valid card");
    assert_eq!(card.province(), Some("福建省"));
    assert_eq!(card.city(), Some("泉州市"));
    assert_eq!(card.county(), None);
    assert_eq!(card.area(" "), "福建省 泉州市 ");
}

#[test]
fn region_table_misses_do_not_block_decoding() {
    // 91 passes province validation but has no entry in the region tables.
    let card = IdentityCard::make("910101198808080019", Locale::ZhCn).expect("valid card");
    assert_eq!(card.province(), None);
    assert_eq!(card.city(), None);
    assert_eq!(card.county(), None);
    assert_eq!(card.area(" "), "  ");
    assert_eq!(card.gender(), "男");
    assert_eq!(card.zodiac(), "龙");
    assert_eq!(card.constellation(), "狮子座");
}

// --- birthday formatting and age ---

#[test]
fn birthday_renders_through_strftime_patterns() {
    let card = IdentityCard::make(SAMPLE, Locale::ZhCn).expect("valid card");
    assert_eq!(card.format_birthday("%Y/%m/%d"), "1990/10/21");
    assert_eq!(card.format_birthday("%Y年%m月%d日"), "1990年10月21日");
    assert_eq!(card.format_birthday("%d.%m.%Y"), "21.10.1990");
}

#[test]
fn bad_birthday_patterns_fall_back_to_iso() {
    let card = IdentityCard::make(SAMPLE, Locale::ZhCn).expect("valid card");
    assert_eq!(card.format_birthday("%Q"), "1990-10-21");
}

#[test]
fn age_against_the_clock_only_grows() {
    let card = IdentityCard::make(SAMPLE, Locale::ZhCn).expect("valid card");
    assert!(card.age() >= 35);
}

// --- number passthrough ---

#[test]
fn the_underlying_number_stays_reachable() {
    let card = IdentityCard::make(SAMPLE, Locale::ZhCn).expect("valid card");
    assert_eq!(card.number().as_str(), SAMPLE);
    assert_eq!(card.number().region_code(), "350521");
    assert_eq!(card.number().sequence(), "101");
}
