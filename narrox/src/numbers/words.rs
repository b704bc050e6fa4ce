use crate::error::Result;
use crate::locale::Locale;
use crate::numerals::{namer_for, Grouping, NamingOptions, NumeralNamer};

const TURKIC_ZERO: &str = "sıfır";

/// Locale-aware cardinal and ordinal words on top of a [`NumeralNamer`].
///
/// The namer does the general naming; this layer adds the readings the
/// number pipeline wants on top of it, such as English years.
pub struct NumberWordConverter {
    namer: Box<dyn NumeralNamer>,
}

impl NumberWordConverter {
    pub fn new(namer: Box<dyn NumeralNamer>) -> Self {
        Self { namer }
    }

    pub fn for_locale(locale: Locale) -> Self {
        Self::new(namer_for(locale))
    }

    pub fn locale(&self) -> Locale {
        self.namer.locale()
    }

    pub fn cardinal(&self, n: u64) -> Result<String> {
        match self.locale() {
            Locale::English => self.english_cardinal(n),
            Locale::Azerbaijani | Locale::Turkish => {
                if n == 0 {
                    Ok(TURKIC_ZERO.to_string())
                } else {
                    self.namer.cardinal(n, &NamingOptions::default())
                }
            }
        }
    }

    pub fn ordinal(&self, token: &str) -> Result<String> {
        self.namer.ordinal(token)
    }

    // Values strictly between 1000 and 3000 are read like years.
    fn english_cardinal(&self, n: u64) -> Result<String> {
        let defaults = NamingOptions::default();

        if n > 1000 && n < 3000 {
            if n == 2000 {
                return Ok("two thousand".to_string());
            }
            if n > 2000 && n < 2010 {
                return Ok(format!(
                    "two thousand {}",
                    self.namer.cardinal(n % 100, &defaults)?
                ));
            }
            if n % 100 == 0 {
                return Ok(format!(
                    "{} hundred",
                    self.namer.cardinal(n / 100, &defaults)?
                ));
            }
            let year = NamingOptions {
                and_word: "",
                zero_word: "oh",
                group: Grouping::Pairs,
            };
            return self.namer.cardinal(n, &year);
        }

        let plain = NamingOptions {
            and_word: "",
            ..defaults
        };
        self.namer.cardinal(n, &plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizeError;
    use crate::numerals::EnglishNamer;

    /// Echoes its arguments so the chosen options are visible in the output.
    struct EchoNamer(Locale);

    impl NumeralNamer for EchoNamer {
        fn locale(&self) -> Locale {
            self.0
        }

        fn cardinal(&self, n: u64, options: &NamingOptions) -> Result<String> {
            Ok(format!(
                "{n}[{}|{}|{:?}]",
                options.and_word, options.zero_word, options.group
            ))
        }

        fn ordinal(&self, token: &str) -> Result<String> {
            Ok(format!("ord({token})"))
        }
    }

    fn echo(locale: Locale) -> NumberWordConverter {
        NumberWordConverter::new(Box::new(EchoNamer(locale)))
    }

    #[test]
    fn test_english_year_overrides() {
        let words = echo(Locale::English);
        assert_eq!(words.cardinal(2000).unwrap(), "two thousand");
        assert_eq!(
            words.cardinal(2005).unwrap(),
            "two thousand 5[and|zero|Standard]"
        );
        assert_eq!(
            words.cardinal(1900).unwrap(),
            "19[and|zero|Standard] hundred"
        );
        assert_eq!(words.cardinal(1984).unwrap(), "1984[|oh|Pairs]");
        assert_eq!(words.cardinal(2010).unwrap(), "2010[|oh|Pairs]");
    }

    #[test]
    fn test_english_outside_year_band_uses_plain_naming() {
        let words = echo(Locale::English);
        for n in [0, 1, 999, 1000, 3000, 9999] {
            assert_eq!(
                words.cardinal(n).unwrap(),
                format!("{n}[|zero|Standard]")
            );
        }
    }

    #[test]
    fn test_english_plain_range_matches_namer() {
        let words = NumberWordConverter::for_locale(Locale::English);
        let plain = NamingOptions {
            and_word: "",
            ..NamingOptions::default()
        };
        for n in (0..1000).chain(3000..10000) {
            assert_eq!(
                words.cardinal(n).unwrap(),
                EnglishNamer.cardinal(n, &plain).unwrap()
            );
        }
    }

    #[test]
    fn test_english_real_words() {
        let words = NumberWordConverter::for_locale(Locale::English);
        assert_eq!(words.cardinal(2000).unwrap(), "two thousand");
        assert_eq!(words.cardinal(2005).unwrap(), "two thousand five");
        assert_eq!(words.cardinal(1900).unwrap(), "nineteen hundred");
        assert_eq!(words.cardinal(1984).unwrap(), "nineteen eighty-four");
        assert_eq!(words.cardinal(1066).unwrap(), "ten sixty-six");
        assert_eq!(words.cardinal(101).unwrap(), "one hundred one");
    }

    #[test]
    fn test_turkic_zero() {
        for locale in [Locale::Azerbaijani, Locale::Turkish] {
            let words = echo(locale);
            assert_eq!(words.cardinal(0).unwrap(), "sıfır");
            assert_eq!(words.cardinal(7).unwrap(), "7[and|zero|Standard]");
        }
    }

    #[test]
    fn test_turkic_differs_from_english() {
        let en = NumberWordConverter::for_locale(Locale::English);
        let az = NumberWordConverter::for_locale(Locale::Azerbaijani);
        assert_eq!(az.cardinal(5).unwrap(), "beş");
        assert_ne!(az.cardinal(5).unwrap(), en.cardinal(5).unwrap());
    }

    #[test]
    fn test_ordinal_passes_token_through() {
        let words = echo(Locale::English);
        assert_eq!(words.ordinal("21st").unwrap(), "ord(21st)");
    }

    #[test]
    fn test_namer_failure_propagates() {
        struct Failing;
        impl NumeralNamer for Failing {
            fn locale(&self) -> Locale {
                Locale::English
            }
            fn cardinal(&self, n: u64, _options: &NamingOptions) -> Result<String> {
                Err(NormalizeError::unsupported(
                    &n.to_string(),
                    Locale::English,
                    "too big",
                ))
            }
            fn ordinal(&self, token: &str) -> Result<String> {
                Err(NormalizeError::unsupported(token, Locale::English, "too big"))
            }
        }

        let words = NumberWordConverter::new(Box::new(Failing));
        assert!(words.cardinal(2005).is_err());
        assert!(words.cardinal(42).is_err());
        assert!(words.ordinal("1st").is_err());
    }
}
