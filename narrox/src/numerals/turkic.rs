//! Azerbaijani and Turkish numerals.
//!
//! Both languages build numbers the same way: words are stacked from the
//! largest scale down, "one" is dropped before hundred and thousand, and
//! ordinals take a vowel-harmonic `-(I)ncI` suffix on the last word.

use crate::error::Result;
use crate::locale::Locale;

use super::{ordinal_value, NamingOptions, NumeralNamer};

struct Lexicon {
    locale: Locale,
    ones: [&'static str; 10],
    tens: [&'static str; 10],
    hundred: &'static str,
    scales: [&'static str; 7],
    zero: &'static str,
}

const AZERBAIJANI: Lexicon = Lexicon {
    locale: Locale::Azerbaijani,
    ones: [
        "", "bir", "iki", "üç", "dörd", "beş", "altı", "yeddi", "səkkiz", "doqquz",
    ],
    tens: [
        "", "on", "iyirmi", "otuz", "qırx", "əlli", "altmış", "yetmiş", "səksən", "doxsan",
    ],
    hundred: "yüz",
    scales: ["", "min", "milyon", "milyard", "trilyon", "katrilyon", "kentilyon"],
    zero: "sıfır",
};

const TURKISH: Lexicon = Lexicon {
    locale: Locale::Turkish,
    ones: [
        "", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
    ],
    tens: [
        "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
    ],
    hundred: "yüz",
    scales: ["", "bin", "milyon", "milyar", "trilyon", "katrilyon", "kentilyon"],
    zero: "sıfır",
};

impl Lexicon {
    fn cardinal(&self, n: u64) -> String {
        if n == 0 {
            return self.zero.to_string();
        }

        let mut triplets = Vec::new();
        let mut rest = n;
        while rest > 0 {
            triplets.push(rest % 1000);
            rest /= 1000;
        }

        let mut words: Vec<&str> = Vec::new();
        for (scale, &triplet) in triplets.iter().enumerate().rev() {
            if triplet == 0 {
                continue;
            }
            // "min", not "bir min"
            if !(scale == 1 && triplet == 1) {
                self.push_triplet(triplet, &mut words);
            }
            if scale > 0 {
                words.push(self.scales[scale]);
            }
        }
        words.join(" ")
    }

    fn push_triplet(&self, triplet: u64, words: &mut Vec<&'static str>) {
        let hundreds = (triplet / 100) as usize;
        let tens = (triplet / 10 % 10) as usize;
        let ones = (triplet % 10) as usize;

        if hundreds > 1 {
            words.push(self.ones[hundreds]);
        }
        if hundreds > 0 {
            words.push(self.hundred);
        }
        if tens > 0 {
            words.push(self.tens[tens]);
        }
        if ones > 0 {
            words.push(self.ones[ones]);
        }
    }

    fn ordinal(&self, token: &str) -> Result<String> {
        let n = ordinal_value(token, self.locale)?;
        let words = self.cardinal(n);
        let (head, last) = match words.rfind(' ') {
            Some(i) => words.split_at(i + 1),
            None => ("", words.as_str()),
        };
        Ok(format!("{head}{}", self.ordinal_word(last)))
    }

    fn ordinal_word(&self, word: &str) -> String {
        let stem = match (self.locale, word.strip_suffix("dört")) {
            (Locale::Turkish, Some(prefix)) => format!("{prefix}dörd"),
            _ => word.to_string(),
        };

        let vowel = harmonic_vowel(&stem);
        let ends_in_vowel = stem.chars().last().is_some_and(is_vowel);
        if ends_in_vowel {
            format!("{stem}nc{vowel}")
        } else {
            format!("{stem}{vowel}nc{vowel}")
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'ı' | 'o' | 'u' | 'e' | 'ə' | 'i' | 'ö' | 'ü')
}

/// High vowel of the suffix, chosen by the last vowel of the stem.
fn harmonic_vowel(stem: &str) -> char {
    match stem.chars().rev().find(|&c| is_vowel(c)) {
        Some('a' | 'ı') => 'ı',
        Some('o' | 'u') => 'u',
        Some('ö' | 'ü') => 'ü',
        _ => 'i',
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AzerbaijaniNamer;

impl NumeralNamer for AzerbaijaniNamer {
    fn locale(&self) -> Locale {
        Locale::Azerbaijani
    }

    fn cardinal(&self, n: u64, _options: &NamingOptions) -> Result<String> {
        Ok(AZERBAIJANI.cardinal(n))
    }

    fn ordinal(&self, token: &str) -> Result<String> {
        AZERBAIJANI.ordinal(token)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TurkishNamer;

impl NumeralNamer for TurkishNamer {
    fn locale(&self) -> Locale {
        Locale::Turkish
    }

    fn cardinal(&self, n: u64, _options: &NamingOptions) -> Result<String> {
        Ok(TURKISH.cardinal(n))
    }

    fn ordinal(&self, token: &str) -> Result<String> {
        TURKISH.ordinal(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn az(n: u64) -> String {
        AzerbaijaniNamer
            .cardinal(n, &NamingOptions::default())
            .unwrap()
    }

    fn tr(n: u64) -> String {
        TurkishNamer.cardinal(n, &NamingOptions::default()).unwrap()
    }

    #[test]
    fn test_azerbaijani_cardinals() {
        assert_eq!(az(0), "sıfır");
        assert_eq!(az(5), "beş");
        assert_eq!(az(15), "on beş");
        assert_eq!(az(50), "əlli");
        assert_eq!(az(100), "yüz");
        assert_eq!(az(345), "üç yüz qırx beş");
        assert_eq!(az(1000), "min");
        assert_eq!(az(1984), "min doqquz yüz səksən dörd");
        assert_eq!(az(2024), "iki min iyirmi dörd");
        assert_eq!(az(1_000_000), "bir milyon");
        assert_eq!(az(3_000_000_000), "üç milyard");
    }

    #[test]
    fn test_turkish_cardinals() {
        assert_eq!(tr(4), "dört");
        assert_eq!(tr(7), "yedi");
        assert_eq!(tr(1000), "bin");
        assert_eq!(tr(1453), "bin dört yüz elli üç");
        assert_eq!(tr(2_000_000_000), "iki milyar");
    }

    #[test]
    fn test_azerbaijani_ordinals() {
        assert_eq!(AzerbaijaniNamer.ordinal("1inci").unwrap(), "birinci");
        assert_eq!(AzerbaijaniNamer.ordinal("2-ci").unwrap(), "ikinci");
        assert_eq!(AzerbaijaniNamer.ordinal("3-cü").unwrap(), "üçüncü");
        assert_eq!(AzerbaijaniNamer.ordinal("4üncü").unwrap(), "dördüncü");
        assert_eq!(AzerbaijaniNamer.ordinal("6-cı").unwrap(), "altıncı");
        assert_eq!(AzerbaijaniNamer.ordinal("10uncu").unwrap(), "onuncu");
        assert_eq!(AzerbaijaniNamer.ordinal("90ıncı").unwrap(), "doxsanıncı");
        assert_eq!(AzerbaijaniNamer.ordinal("100üncü").unwrap(), "yüzüncü");
        assert_eq!(
            AzerbaijaniNamer.ordinal("21inci").unwrap(),
            "iyirmi birinci"
        );
    }

    #[test]
    fn test_turkish_ordinals() {
        assert_eq!(TurkishNamer.ordinal("4üncü").unwrap(), "dördüncü");
        assert_eq!(TurkishNamer.ordinal("7nci").unwrap(), "yedinci");
        assert_eq!(TurkishNamer.ordinal("40ıncı").unwrap(), "kırkıncı");
        assert_eq!(TurkishNamer.ordinal("1000inci").unwrap(), "bininci");
        assert_eq!(TurkishNamer.ordinal("24üncü").unwrap(), "yirmi dördüncü");
    }
}
