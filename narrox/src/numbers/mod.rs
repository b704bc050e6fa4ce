//! Number normalization: rewrites digits, decimals, ordinals and currency
//! amounts embedded in text into spoken words.

pub mod currency;
pub mod rules;
pub mod words;

use tracing::{debug, trace};

use crate::error::Result;
use crate::locale::Locale;

pub use currency::{CurrencyAmount, CurrencyUnits};
pub use rules::{NumberRules, RewriteRule, RuleAction};
pub use words::NumberWordConverter;

/// Runs a locale's rule table over text, one full pass per rule.
pub struct NumberNormalizer {
    rules: NumberRules,
    words: NumberWordConverter,
}

impl NumberNormalizer {
    pub fn new(rules: NumberRules, words: NumberWordConverter) -> Self {
        Self { rules, words }
    }

    pub fn for_locale(locale: Locale) -> Self {
        Self::new(
            NumberRules::for_locale(locale),
            NumberWordConverter::for_locale(locale),
        )
    }

    pub fn locale(&self) -> Locale {
        self.rules.locale()
    }

    pub fn normalize(&self, text: &str) -> Result<String> {
        debug!(locale = %self.locale(), "normalizing numbers");

        let mut text = text.to_string();
        for rule in self.rules.rules() {
            let rewritten = rule.apply(&text, &self.words)?;
            if rewritten != text {
                trace!(rule = rule.name(), output = %rewritten, "rule rewrote text");
                text = rewritten;
            }
        }
        Ok(text)
    }
}

/// Expands the numbers in `text` for the locale named by `locale`.
///
/// The tag is resolved before any rule runs, so an unknown locale fails
/// without touching the text.
pub fn normalize_numbers(text: &str, locale: &str) -> Result<String> {
    let locale: Locale = locale.parse()?;
    NumberNormalizer::for_locale(locale).normalize(text)
}
