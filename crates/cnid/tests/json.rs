//! Tests for the profile and its two JSON renderings.

use chrono::NaiveDate;
use cnid::{IdentityCard, Locale, Profile};
use serde_json::{Value, json};

const SAMPLE: &str = "350521199010211013";

fn sample_card(locale: Locale) -> IdentityCard {
    IdentityCard::make(SAMPLE, locale).expect("valid card")
}

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 12, 24).expect("valid test date")
}

#[test]
fn profile_collects_every_decoded_field() {
    let profile = sample_card(Locale::ZhCn).profile_on(reference_day());
    assert_eq!(
        profile,
        Profile {
            area: "福建省 泉州市 惠安县".to_owned(),
            province: Some("福建省".to_owned()),
            city: Some("泉州市".to_owned()),
            county: Some("惠安县".to_owned()),
            gender: "男".to_owned(),
            birthday: "1990-10-21".to_owned(),
            zodiac: "马".to_owned(),
            age: 29,
            constellation: "天秤座".to_owned(),
        }
    );
}

#[test]
fn json_matches_the_reference_value() {
    let json = sample_card(Locale::ZhCn)
        .profile_on(reference_day())
        .to_json()
        .expect("serialize profile");
    let value: Value = serde_json::from_str(&json).expect("well-formed JSON");
    assert_eq!(
        value,
        json!({
            "area": "福建省 泉州市 惠安县",
            "province": "福建省",
            "city": "泉州市",
            "county": "惠安县",
            "gender": "男",
            "birthday": "1990-10-21",
            "zodiac": "马",
            "age": 29,
            "constellation": "天秤座"
        })
    );
}

#[test]
fn json_keys_keep_the_declared_order() {
    let json = sample_card(Locale::ZhCn)
        .profile_on(reference_day())
        .to_json()
        .expect("serialize profile");
    let position = |key: &str| {
        json.find(&format!("\"{key}\":"))
            .unwrap_or_else(|| panic!("{key} missing from {json}"))
    };
    let positions = [
        position("area"),
        position("province"),
        position("city"),
        position("county"),
        position("gender"),
        position("birthday"),
        position("zodiac"),
        position("age"),
        position("constellation"),
    ];
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn json_leaves_utf8_unescaped() {
    let json = sample_card(Locale::ZhCn)
        .profile_on(reference_day())
        .to_json()
        .expect("serialize profile");
    assert!(json.contains("福建省"));
    assert!(!json.contains("\\u"));
}

#[test]
fn ascii_json_escapes_to_utf16_units() {
    let profile = sample_card(Locale::ZhCn).profile_on(reference_day());
    let ascii = profile.to_json_ascii().expect("serialize profile");
    assert!(ascii.is_ascii());
    // 福建省 is U+798F U+5EFA U+7701.
    assert!(ascii.contains("\\u798f\\u5efa\\u7701"));

    let parsed: Profile = serde_json::from_str(&ascii).expect("well-formed JSON");
    assert_eq!(parsed, profile);
}

#[test]
fn english_json_needs_no_escapes() {
    let profile = sample_card(Locale::EnUs).profile_on(reference_day());
    let json = profile.to_json().expect("serialize profile");
    assert!(json.is_ascii());
    assert!(json.contains("\"Fujian Sheng\""));
    assert_eq!(json, profile.to_json_ascii().expect("serialize profile"));
}

#[test]
fn region_misses_serialize_as_null() {
    let profile = IdentityCard::make("910101198808080019", Locale::ZhCn)
        .expect("valid card")
        .profile_on(reference_day());
    let json = profile.to_json().expect("serialize profile");
    assert!(json.contains("\"province\":null"));
    assert!(json.contains("\"city\":null"));
    assert!(json.contains("\"county\":null"));
    assert!(json.contains("\"area\":\"  \""));
}

#[test]
fn clock_based_json_has_the_full_shape() {
    let card = sample_card(Locale::ZhCn);
    let value: Value =
        serde_json::from_str(&card.to_json().expect("serialize profile")).expect("well-formed");
    let object = value.as_object().expect("a JSON object");
    assert_eq!(object.len(), 9);
    assert!(object["age"].is_u64());
}

#[test]
fn display_renders_the_json_profile() {
    let card = sample_card(Locale::ZhCn);
    let shown = card.to_string();
    let value: Value = serde_json::from_str(&shown).expect("well-formed JSON");
    assert_eq!(value["county"], json!("惠安县"));
}
