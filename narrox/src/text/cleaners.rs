//! Named cleaning pipelines.
//!
//! A cleaner is a fixed sequence of text stages, selected by name. Several
//! can be chained with a comma-delimited list such as
//! `"english_cleaners,basic_cleaners"`.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::abbreviations::expand_abbreviations;
use super::{collapse_whitespace, convert_to_ascii, lowercase, replace_schwa};
use crate::error::{NormalizeError, Result};
use crate::locale::Locale;
use crate::numbers::NumberNormalizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleaner {
    /// Lowercase and collapse whitespace, no transliteration.
    Basic,
    /// Transliterate to ASCII, lowercase, collapse whitespace.
    Transliteration,
    /// Expand numbers, transliterate, expand numbers left by transliteration,
    /// lowercase, expand abbreviations.
    English,
    Azerbaijani,
    Turkish,
}

impl Cleaner {
    pub const ALL: [Cleaner; 5] = [
        Cleaner::Basic,
        Cleaner::Transliteration,
        Cleaner::English,
        Cleaner::Azerbaijani,
        Cleaner::Turkish,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Cleaner::Basic => "basic_cleaners",
            Cleaner::Transliteration => "transliteration_cleaners",
            Cleaner::English => "english_cleaners",
            Cleaner::Azerbaijani => "azerbaijani_cleaners",
            Cleaner::Turkish => "turkish_cleaners",
        }
    }

    /// Locale whose numbers and abbreviations the cleaner expands, if any.
    pub fn locale(&self) -> Option<Locale> {
        match self {
            Cleaner::Basic | Cleaner::Transliteration => None,
            Cleaner::English => Some(Locale::English),
            Cleaner::Azerbaijani => Some(Locale::Azerbaijani),
            Cleaner::Turkish => Some(Locale::Turkish),
        }
    }

    pub fn clean(&self, text: &str) -> Result<String> {
        debug!(cleaner = self.name(), "cleaning text");

        match self {
            Cleaner::Basic => Ok(collapse_whitespace(&lowercase(text))),
            Cleaner::Transliteration => {
                Ok(collapse_whitespace(&lowercase(&convert_to_ascii(text))))
            }
            Cleaner::English => {
                // numbers first: transliteration turns £ into "PS"
                let numbers = NumberNormalizer::for_locale(Locale::English);
                let text = convert_to_ascii(&numbers.normalize(text)?);
                // again for digits that only became ASCII just now
                let text = lowercase(&numbers.normalize(&text)?);
                let text = expand_abbreviations(&text, Locale::English);
                Ok(collapse_whitespace(&text))
            }
            Cleaner::Azerbaijani | Cleaner::Turkish => {
                let locale = match self {
                    Cleaner::Turkish => Locale::Turkish,
                    _ => Locale::Azerbaijani,
                };
                // the ordinal suffixes and unit words need their original letters
                let text = NumberNormalizer::for_locale(locale).normalize(text)?;
                let text = expand_abbreviations(&text, locale);
                let text = convert_to_ascii(&replace_schwa(&text));
                Ok(collapse_whitespace(&lowercase(&text)))
            }
        }
    }
}

impl fmt::Display for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cleaner {
    type Err = NormalizeError;

    /// Accepts the full name (`english_cleaners`) or its stem (`english`).
    fn from_str(name: &str) -> Result<Self> {
        let wanted = name.trim().to_lowercase();
        let stem = wanted.strip_suffix("_cleaners").unwrap_or(&wanted);

        Cleaner::ALL
            .into_iter()
            .find(|cleaner| cleaner.name().strip_suffix("_cleaners") == Some(stem))
            .ok_or_else(|| NormalizeError::UnknownCleaner(name.trim().to_string()))
    }
}

/// Cleaners run one after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerChain {
    cleaners: Vec<Cleaner>,
}

impl CleanerChain {
    pub fn new(cleaners: Vec<Cleaner>) -> Self {
        Self { cleaners }
    }

    pub fn cleaners(&self) -> &[Cleaner] {
        &self.cleaners
    }

    pub fn clean(&self, text: &str) -> Result<String> {
        let mut text = text.to_string();
        for cleaner in &self.cleaners {
            text = cleaner.clean(&text)?;
        }
        Ok(text)
    }
}

impl FromStr for CleanerChain {
    type Err = NormalizeError;

    /// Parses `"a,b,c"`. Every name is checked before anything runs; empty
    /// entries are skipped.
    fn from_str(names: &str) -> Result<Self> {
        let cleaners = names
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Cleaner>>>()?;
        Ok(Self::new(cleaners))
    }
}

/// Runs the comma-delimited cleaner list `names` over `text`.
pub fn clean_text(text: &str, names: &str) -> Result<String> {
    names.parse::<CleanerChain>()?.clean(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cleaner_names() {
        assert_eq!("english_cleaners".parse::<Cleaner>(), Ok(Cleaner::English));
        assert_eq!("Basic".parse::<Cleaner>(), Ok(Cleaner::Basic));
        assert_eq!(" turkish ".parse::<Cleaner>(), Ok(Cleaner::Turkish));
        assert_eq!(
            "klingon_cleaners".parse::<Cleaner>(),
            Err(NormalizeError::UnknownCleaner("klingon_cleaners".to_string()))
        );
        for cleaner in Cleaner::ALL {
            assert_eq!(cleaner.name().parse::<Cleaner>(), Ok(cleaner));
        }
    }

    #[test]
    fn test_basic_cleaners() {
        assert_eq!(
            Cleaner::Basic.clean("Hello   WORLD\n$5").unwrap(),
            "hello world $5"
        );
    }

    #[test]
    fn test_transliteration_cleaners() {
        assert_eq!(
            Cleaner::Transliteration.clean("Café   Ölçü").unwrap(),
            "cafe olcu"
        );
    }

    #[test]
    fn test_english_cleaners() {
        assert_eq!(
            Cleaner::English
                .clean("Dr. Smith paid $5.00 on Jan 1ST,  2005.")
                .unwrap(),
            "doctor smith paid five dollars on jan first, two thousand five."
        );
        assert_eq!(
            Cleaner::English.clean("It was ３ o'clock, £2 each").unwrap(),
            "it was three o'clock, two pounds each"
        );
    }

    #[test]
    fn test_azerbaijani_cleaners() {
        assert_eq!(
            Cleaner::Azerbaijani.clean("Ədalət 5 km. getdi").unwrap(),
            "wdalwt bes kilometrw getdi"
        );
        assert_eq!(
            Cleaner::Azerbaijani.clean("Qiyməti ₼0.00").unwrap(),
            "qiymwti sifir manat"
        );
    }

    #[test]
    fn test_turkish_cleaners() {
        assert_eq!(
            Cleaner::Turkish.clean("Fiyatı ₺3 ve 4üncü kat").unwrap(),
            "fiyati uc lira ve dorduncu kat"
        );
        assert_eq!(
            Cleaner::Turkish.clean("Fiyat ₼5").unwrap(),
            "fiyat bes manat"
        );
        assert_eq!(
            Cleaner::Turkish.clean("5İNCİ Kat").unwrap(),
            "besinci kat"
        );
    }

    #[test]
    fn test_chain_validates_before_running() {
        assert!(matches!(
            clean_text("anything", "basic_cleaners,nope"),
            Err(NormalizeError::UnknownCleaner(name)) if name == "nope"
        ));
        let chain: CleanerChain = "english, ,basic".parse().unwrap();
        assert_eq!(chain.cleaners(), &[Cleaner::English, Cleaner::Basic]);
    }

    #[test]
    fn test_clean_text_runs_in_order() {
        assert_eq!(
            clean_text("  Mr. Brown owes £20 ", "english_cleaners").unwrap(),
            " mister brown owes twenty pounds "
        );
        assert_eq!(clean_text("Same", "").unwrap(), "Same");
    }
}
