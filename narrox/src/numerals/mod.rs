//! Spoken-word naming of integers.
//!
//! Every locale the normalizer supports provides a [`NumeralNamer`]. The
//! number pipeline only talks to this trait, so tests can swap in a
//! deterministic namer without the real word tables.

pub mod english;
pub mod turkic;

use crate::error::{NormalizeError, Result};
use crate::locale::Locale;

pub use english::EnglishNamer;
pub use turkic::{AzerbaijaniNamer, TurkishNamer};

/// How digits are grouped when naming a cardinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Thousands, millions, ... ("one thousand, nine hundred").
    Standard,
    /// Two-digit chunks read left to right, as years are ("nineteen oh five").
    Pairs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingOptions {
    /// Placed between "hundred" and the remainder. Empty drops it.
    pub and_word: &'static str,
    /// Spoken for a zero value, and for zero digits under [`Grouping::Pairs`].
    pub zero_word: &'static str,
    pub group: Grouping,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            and_word: "and",
            zero_word: "zero",
            group: Grouping::Standard,
        }
    }
}

pub trait NumeralNamer: Send + Sync {
    fn locale(&self) -> Locale;

    /// Cardinal words for `n`.
    fn cardinal(&self, n: u64, options: &NamingOptions) -> Result<String>;

    /// Ordinal words for a matched token such as `21st`, `5inci` or `3-cü`.
    ///
    /// The token is passed as written, suffix included. Its leading ASCII
    /// digits carry the value and whatever follows them is ignored, so
    /// `1th` still reads as "first". Fails when there are no leading digits
    /// or the value does not fit.
    fn ordinal(&self, token: &str) -> Result<String>;
}

/// The real namer for `locale`.
pub fn namer_for(locale: Locale) -> Box<dyn NumeralNamer> {
    match locale {
        Locale::English => Box::new(EnglishNamer),
        Locale::Azerbaijani => Box::new(AzerbaijaniNamer),
        Locale::Turkish => Box::new(TurkishNamer),
    }
}

/// Parses a run of ASCII digits, reporting overflow as an unsupported numeral.
pub fn parse_numeral(digits: &str, locale: Locale) -> Result<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NormalizeError::unsupported(digits, locale, "not a base-10 numeral"));
    }
    digits
        .parse::<u64>()
        .map_err(|_| NormalizeError::unsupported(digits, locale, "value exceeds the supported range"))
}

/// Value of the digits an ordinal token starts with.
pub(crate) fn ordinal_value(token: &str, locale: Locale) -> Result<u64> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    if end == 0 {
        return Err(NormalizeError::unsupported(token, locale, "ordinal has no leading digits"));
    }
    parse_numeral(&token[..end], locale)
}
