//! The decoded card: a validated number bound to one locale's labels.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use cnid_locale::{EmbeddedTables, Locale, LocaleProvider, LocaleTable};
use cnid_model::IdentityCardNumber;

use crate::error::CardError;
use crate::profile::Profile;

/// A validated identity card number together with the locale used to name
/// its decoded attributes.
///
/// Division lookups return `None` for codes the locale table does not carry;
/// everything else decodes from the number itself and cannot miss. The bound
/// table is shared, so cloning a card is cheap.
#[derive(Debug, Clone)]
pub struct IdentityCard {
    number: IdentityCardNumber,
    locale: Locale,
    table: Arc<LocaleTable>,
}

impl IdentityCard {
    /// Validate a candidate without building a card.
    pub fn check(value: &str) -> bool {
        IdentityCardNumber::is_valid(value)
    }

    /// Build a card with the embedded tables for `locale`.
    pub fn make(value: &str, locale: Locale) -> Result<Self, CardError> {
        Self::make_with_provider(value, locale, &EmbeddedTables)
    }

    /// Build a card from a textual locale tag such as `zh-CN` or `en_us`.
    ///
    /// The number is validated before the tag is resolved, so when both are
    /// bad the format error wins.
    pub fn make_with_tag(value: &str, tag: &str) -> Result<Self, CardError> {
        let number = IdentityCardNumber::parse(value)?;
        let locale: Locale = tag.parse()?;
        let table = EmbeddedTables.load(locale)?;
        Ok(Self {
            number,
            locale,
            table,
        })
    }

    /// Build a card with tables from a caller-supplied provider.
    pub fn make_with_provider(
        value: &str,
        locale: Locale,
        provider: &impl LocaleProvider,
    ) -> Result<Self, CardError> {
        let number = IdentityCardNumber::parse(value)?;
        let table = provider.load(locale)?;
        Ok(Self {
            number,
            locale,
            table,
        })
    }

    pub fn number(&self) -> &IdentityCardNumber {
        &self.number
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Province-level division name, if the table carries the code.
    pub fn province(&self) -> Option<&str> {
        self.table.region_name(&self.number.province_key())
    }

    /// Prefecture-level division name, if the table carries the code.
    pub fn city(&self) -> Option<&str> {
        self.table.region_name(&self.number.city_key())
    }

    /// County-level division name, if the table carries the code.
    pub fn county(&self) -> Option<&str> {
        self.table.region_name(self.number.county_key())
    }

    /// The three division names joined by `separator`.
    ///
    /// Missing divisions join in as empty strings and the separators stay,
    /// so the field count is fixed at three.
    pub fn area(&self, separator: &str) -> String {
        format!(
            "{}{separator}{}{separator}{}",
            self.province().unwrap_or(""),
            self.city().unwrap_or(""),
            self.county().unwrap_or("")
        )
    }

    /// Localized gender label.
    pub fn gender(&self) -> &str {
        self.table.gender_label(self.number.gender())
    }

    /// Birth date in ISO `YYYY-MM-DD` form.
    pub fn birthday(&self) -> String {
        self.number.birth_date().format("%Y-%m-%d").to_string()
    }

    /// Birth date rendered through a chrono `strftime` pattern.
    ///
    /// chrono reports unknown specifiers through the formatter, so a bad
    /// pattern falls back to the ISO rendering instead of panicking.
    pub fn format_birthday(&self, pattern: &str) -> String {
        let mut rendered = String::new();
        match write!(rendered, "{}", self.number.birth_date().format(pattern)) {
            Ok(()) => rendered,
            Err(fmt::Error) => self.birthday(),
        }
    }

    /// Completed years of age against the local clock.
    pub fn age(&self) -> u32 {
        self.age_on(Local::now().date_naive())
    }

    /// Completed years of age as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        self.number.age_on(today)
    }

    /// Localized zodiac animal name.
    pub fn zodiac(&self) -> &str {
        self.table.zodiac_name(self.number.zodiac())
    }

    /// Localized constellation name.
    pub fn constellation(&self) -> &str {
        self.table.constellation_name(self.number.constellation())
    }

    /// Decode everything, with age against the local clock.
    pub fn profile(&self) -> Profile {
        self.profile_on(Local::now().date_naive())
    }

    /// Decode everything, with age as of `today`.
    pub fn profile_on(&self, today: NaiveDate) -> Profile {
        Profile {
            area: self.area(" "),
            province: self.province().map(str::to_owned),
            city: self.city().map(str::to_owned),
            county: self.county().map(str::to_owned),
            gender: self.gender().to_owned(),
            birthday: self.birthday(),
            zodiac: self.zodiac().to_owned(),
            age: self.age_on(today),
            constellation: self.constellation().to_owned(),
        }
    }

    /// The profile as compact JSON, non-ASCII left as UTF-8.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.profile().to_json()
    }

    /// The profile as compact JSON with non-ASCII escaped to `\uXXXX`.
    pub fn to_json_ascii(&self) -> Result<String, serde_json::Error> {
        self.profile().to_json_ascii()
    }
}

impl fmt::Display for IdentityCard {
    /// The JSON profile as of today.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
