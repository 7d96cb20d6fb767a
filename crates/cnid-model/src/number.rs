//! The 18-character number: layout offsets, weighted checksum, and the
//! validated [`IdentityCardNumber`] wrapper.
//!
//! GB 11643-1999 lays the number out as six region digits, an eight-digit
//! birth date, a three-digit sequence code, and one check character:
//!
//! ```text
//! 3 5 0 5 2 1 | 1 9 9 0 1 0 2 1 | 1 0 1 | 3
//! region        birth date        seq     check
//! 0         5   6            13   14  16   17
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::enums::{Constellation, Gender, Zodiac};
use crate::error::FormatError;

/// Total number length in characters.
pub const LENGTH: usize = 18;
/// Position of the check character; everything before it is the payload.
pub const CHECK_POSITION: usize = 17;
/// Position of the sequence digit whose parity encodes gender.
pub const GENDER_POSITION: usize = 16;
/// GB/T 2260 administrative division code.
pub const REGION_RANGE: Range<usize> = 0..6;
/// Province-level digits within the region code.
pub const PROVINCE_RANGE: Range<usize> = 0..2;
/// Prefecture-level digits within the region code, province included.
pub const CITY_RANGE: Range<usize> = 0..4;
/// Birth date digits, `YYYYMMDD`.
pub const BIRTH_DATE_RANGE: Range<usize> = 6..14;
/// Sequence code digits.
pub const SEQUENCE_RANGE: Range<usize> = 14..17;

/// Per-position weights of the ISO 7064 MOD 11-2 checksum.
pub const CHECKSUM_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check characters indexed by the weighted sum modulo 11.
pub const CHECK_CHARS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Assigned province-level prefixes, including Taiwan (71), Hong Kong (81),
/// Macao (82), and the 91 prefix seen on some issued cards.
pub const PROVINCE_CODES: [&str; 35] = [
    "11", "12", "13", "14", "15", "21", "22", "23", "31", "32", "33", "34", "35", "36", "37",
    "41", "42", "43", "44", "45", "46", "50", "51", "52", "53", "54", "61", "62", "63", "64",
    "65", "71", "81", "82", "91",
];

/// Expected check character for a 17-character payload.
///
/// Returns `None` unless the payload is exactly 17 characters long.
/// Characters outside `0-9` contribute zero to the weighted sum, which keeps
/// the computation total over arbitrary payloads;
/// [`IdentityCardNumber::parse`] rejects non-digit payloads before the
/// checksum runs.
pub fn check_character(payload: &str) -> Option<char> {
    (payload.chars().count() == CHECK_POSITION)
        .then(|| CHECK_CHARS[(weighted_sum(payload) % 11) as usize])
}

fn weighted_sum(payload: &str) -> u32 {
    payload
        .chars()
        .zip(CHECKSUM_WEIGHTS)
        .map(|(ch, weight)| ch.to_digit(10).unwrap_or(0) * weight)
        .sum()
}

/// An identity card number that passed every format rule.
///
/// Construction goes through [`parse`](Self::parse), so a held value is
/// always 18 ASCII characters with a consistent checksum, an assigned
/// province prefix, and a real calendar birth date. Slicing accessors return
/// views into the original string; derived attributes decode from the stored
/// birth date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentityCardNumber {
    value: String,
    birth_date: NaiveDate,
}

impl IdentityCardNumber {
    /// Validate a candidate string and wrap it.
    ///
    /// Rules are checked in order: length, payload digits, check character,
    /// birth date, province code, checksum. The first failure is returned.
    /// The check character may be upper- or lowercase `x`; the input is
    /// stored as given.
    pub fn parse(value: &str) -> Result<Self, FormatError> {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() != LENGTH {
            return Err(FormatError::InvalidLength {
                actual: chars.len(),
            });
        }
        for (position, &found) in chars[..CHECK_POSITION].iter().enumerate() {
            if !found.is_ascii_digit() {
                return Err(FormatError::InvalidDigit { position, found });
            }
        }
        let found = chars[CHECK_POSITION];
        if !found.is_ascii_digit() && !found.eq_ignore_ascii_case(&'X') {
            return Err(FormatError::InvalidCheckChar { found });
        }
        // All 18 characters are ASCII from here on, so range indexing is
        // char-exact.
        let birth_date = parse_birth_date(&value[BIRTH_DATE_RANGE])?;
        let province = &value[PROVINCE_RANGE];
        if !PROVINCE_CODES.contains(&province) {
            return Err(FormatError::UnknownProvince {
                code: province.to_owned(),
            });
        }
        let expected = CHECK_CHARS[(weighted_sum(&value[..CHECK_POSITION]) % 11) as usize];
        if !found.eq_ignore_ascii_case(&expected) {
            return Err(FormatError::ChecksumMismatch { expected, found });
        }
        Ok(Self {
            value: value.to_owned(),
            birth_date,
        })
    }

    /// Run the full validation without keeping the parsed result.
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Six-digit GB/T 2260 region code.
    pub fn region_code(&self) -> &str {
        &self.value[REGION_RANGE]
    }

    /// Lookup key of the province-level division, `PP0000`.
    pub fn province_key(&self) -> String {
        format!("{}0000", &self.value[PROVINCE_RANGE])
    }

    /// Lookup key of the prefecture-level division, `PPCC00`.
    pub fn city_key(&self) -> String {
        format!("{}00", &self.value[CITY_RANGE])
    }

    /// Lookup key of the county-level division; the full region code.
    pub fn county_key(&self) -> &str {
        self.region_code()
    }

    /// Birth date digits, `YYYYMMDD`.
    pub fn birth_digits(&self) -> &str {
        &self.value[BIRTH_DATE_RANGE]
    }

    /// Three-digit sequence code.
    pub fn sequence(&self) -> &str {
        &self.value[SEQUENCE_RANGE]
    }

    /// Check character as it appears in the number, case preserved.
    pub fn check_char(&self) -> char {
        self.value.as_bytes()[CHECK_POSITION] as char
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Gender encoded by the parity of the last sequence digit.
    pub fn gender(&self) -> Gender {
        let digit = u32::from(self.value.as_bytes()[GENDER_POSITION] - b'0');
        Gender::from_sequence_digit(digit)
    }

    /// Zodiac animal of the birth year.
    pub fn zodiac(&self) -> Zodiac {
        Zodiac::from_year(self.birth_date.year())
    }

    /// Constellation of the birth month and day.
    pub fn constellation(&self) -> Constellation {
        Constellation::from_date(self.birth_date)
    }

    /// Completed years of age as of `today`.
    ///
    /// The count increments on each birthday; a `today` before the birth date
    /// saturates to zero.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }
}

fn parse_birth_date(digits: &str) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::InvalidBirthDate {
        digits: digits.to_owned(),
    };
    let year: i32 = digits[..4].parse().map_err(|_| invalid())?;
    let month: u32 = digits[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = digits[6..].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

impl fmt::Display for IdentityCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for IdentityCardNumber {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for IdentityCardNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> serde::Deserialize<'de> for IdentityCardNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "350521199010211013";

    #[test]
    fn slicing_accessors_follow_the_layout() {
        let number = IdentityCardNumber::parse(SAMPLE).unwrap();
        assert_eq!(number.as_str(), SAMPLE);
        assert_eq!(number.region_code(), "350521");
        assert_eq!(number.province_key(), "350000");
        assert_eq!(number.city_key(), "350500");
        assert_eq!(number.county_key(), "350521");
        assert_eq!(number.birth_digits(), "19901021");
        assert_eq!(number.sequence(), "101");
        assert_eq!(number.check_char(), '3');
    }

    #[test]
    fn check_char_case_is_preserved() {
        let lower = IdentityCardNumber::parse("11010519491231002x").unwrap();
        assert_eq!(lower.check_char(), 'x');
        assert_eq!(lower.to_string(), "11010519491231002x");
    }

    #[test]
    fn check_character_requires_a_full_payload() {
        assert_eq!(check_character("35052119901021101"), Some('3'));
        assert_eq!(check_character("11010519491231002"), Some('X'));
        assert_eq!(check_character(""), None);
        assert_eq!(check_character("3505211990102110"), None);
        assert_eq!(check_character(SAMPLE), None);
    }

    #[test]
    fn check_character_folds_non_digits_to_zero() {
        // 'A' replaces a zero digit, so the sum is unchanged.
        assert_eq!(check_character("35A52119901021101"), Some('3'));
    }

    #[test]
    fn serde_round_trips_through_a_json_string() {
        let number = IdentityCardNumber::parse(SAMPLE).unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let back: IdentityCardNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, number);
    }

    #[test]
    fn serde_rejects_malformed_numbers() {
        let err = serde_json::from_str::<IdentityCardNumber>("\"35052119901021101\"");
        assert!(err.is_err());
    }
}
