use std::fmt;
use std::str::FromStr;

use crate::error::NormalizeError;

/// Language whose numeral, currency and abbreviation conventions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Azerbaijani,
    Turkish,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::English, Locale::Azerbaijani, Locale::Turkish];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Azerbaijani => "az",
            Locale::Turkish => "tr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = NormalizeError;

    /// Accepts `en`, `en-us`, `en_GB`, `az-Latn`, `tr-TR` and the full
    /// language names. Only the primary subtag is looked at.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let lowered = tag.trim().to_lowercase();
        let primary = lowered.split(['-', '_']).next().unwrap_or_default();

        match primary {
            "en" | "english" => Ok(Locale::English),
            "az" | "azerbaijani" => Ok(Locale::Azerbaijani),
            "tr" | "turkish" => Ok(Locale::Turkish),
            _ => Err(NormalizeError::UnknownLocale(tag.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region_variants() {
        assert_eq!("en-us".parse::<Locale>(), Ok(Locale::English));
        assert_eq!("EN_gb".parse::<Locale>(), Ok(Locale::English));
        assert_eq!("az-Latn".parse::<Locale>(), Ok(Locale::Azerbaijani));
        assert_eq!("tr-TR".parse::<Locale>(), Ok(Locale::Turkish));
        assert_eq!("turkish".parse::<Locale>(), Ok(Locale::Turkish));
    }

    #[test]
    fn test_unknown_locale() {
        assert_eq!(
            "de".parse::<Locale>(),
            Err(NormalizeError::UnknownLocale("de".to_string()))
        );
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_code_round_trips() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
            assert_eq!(locale.to_string(), locale.code());
        }
    }
}
