//! Locale tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LocaleError;

/// Locales this crate ships label tables for.
///
/// Tags follow the usual BCP 47 shape in lowercase. Parsing is forgiving
/// about case, surrounding whitespace, and `zh_CN`-style underscores;
/// rendering always uses the canonical form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// Simplified Chinese, the historical default for this card format.
    #[default]
    ZhCn,
    /// English, with GB/T 2260 region names romanized.
    EnUs,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::EnUs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-cn",
            Locale::EnUs => "en-us",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "zh-cn" => Ok(Locale::ZhCn),
            "en-us" => Ok(Locale::EnUs),
            _ => Err(LocaleError::Unsupported {
                tag: s.trim().to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_normalize_before_matching() {
        assert_eq!("zh-cn".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!("ZH_CN".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!(" en-US ".parse::<Locale>().unwrap(), Locale::EnUs);
    }

    #[test]
    fn unknown_tags_are_reported_verbatim() {
        let err = " fr-FR ".parse::<Locale>().unwrap_err();
        assert_eq!(
            err,
            LocaleError::Unsupported {
                tag: "fr-FR".to_owned()
            }
        );
    }

    #[test]
    fn default_is_simplified_chinese() {
        assert_eq!(Locale::default(), Locale::ZhCn);
    }

    #[test]
    fn serde_uses_kebab_case_tags() {
        assert_eq!(serde_json::to_string(&Locale::EnUs).unwrap(), "\"en-us\"");
        let locale: Locale = serde_json::from_str("\"zh-cn\"").unwrap();
        assert_eq!(locale, Locale::ZhCn);
    }
}
