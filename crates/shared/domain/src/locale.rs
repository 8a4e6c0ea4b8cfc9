use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// A supported site locale. Codes are matched exactly (`zh-hk` is not `zh-HK`).
///
/// Declaration order is iteration order, default first.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    En,
    #[serde(rename = "zh-CN")]
    #[strum(serialize = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-HK")]
    #[strum(serialize = "zh-HK")]
    ZhHk,
}

impl Locale {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::En | Self::ZhCn | Self::ZhHk => Direction::Ltr,
        }
    }

    /// Exact match against the supported codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }
}

/// Text direction for a locale's document.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_round_trip_through_strum_and_serde() {
        for locale in Locale::iter() {
            assert_eq!(Locale::from_str(locale.as_str()).unwrap(), locale);
            assert_eq!(locale.to_string(), locale.as_str());

            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.as_str()));
        }
    }

    #[test]
    fn code_matching_is_case_sensitive() {
        assert_eq!(Locale::from_code("zh-HK"), Some(Locale::ZhHk));
        assert_eq!(Locale::from_code("zh-hk"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert!(Locale::from_str("fr").is_err());
    }

    #[test]
    fn default_locale_iterates_first() {
        assert_eq!(Locale::iter().next(), Some(Locale::default()));
        assert_eq!(Locale::iter().collect::<Vec<_>>(), [Locale::En, Locale::ZhCn, Locale::ZhHk]);
    }

    #[test]
    fn every_supported_locale_is_left_to_right() {
        assert!(Locale::iter().all(|l| l.direction() == Direction::Ltr));
        assert_eq!(Direction::Rtl.as_str(), "rtl");
        assert_eq!(serde_json::to_string(&Direction::Ltr).unwrap(), "\"ltr\"");
    }
}
