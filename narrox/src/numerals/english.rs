use crate::error::{NormalizeError, Result};
use crate::locale::Locale;

use super::{ordinal_value, Grouping, NamingOptions, NumeralNamer};

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// u64 tops out in the quintillions
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// English numeral naming in the style of inflect's `number_to_words`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishNamer;

impl NumeralNamer for EnglishNamer {
    fn locale(&self) -> Locale {
        Locale::English
    }

    fn cardinal(&self, n: u64, options: &NamingOptions) -> Result<String> {
        if n == 0 {
            return Ok(options.zero_word.to_string());
        }
        match options.group {
            Grouping::Standard => Ok(standard(n, options.and_word)),
            Grouping::Pairs => Ok(pairs(n, options.zero_word)),
        }
    }

    fn ordinal(&self, token: &str) -> Result<String> {
        let n = ordinal_value(token, Locale::English)?;
        let words = self.cardinal(n, &NamingOptions::default())?;
        ordinalize(&words).ok_or_else(|| {
            NormalizeError::unsupported(token, Locale::English, "no word to inflect")
        })
    }
}

/// 1..=99
fn tens(n: u64) -> String {
    let n = n as usize;
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{}-{}", TENS[n / 10], ONES[n % 10])
    }
}

/// 1..=999
fn hundreds(n: u64, and_word: &str) -> String {
    let rest = n % 100;
    if n < 100 {
        return tens(rest);
    }

    let mut words = format!("{} hundred", ONES[(n / 100) as usize]);
    if rest > 0 {
        if !and_word.is_empty() {
            words.push(' ');
            words.push_str(and_word);
        }
        words.push(' ');
        words.push_str(&tens(rest));
    }
    words
}

fn standard(n: u64, and_word: &str) -> String {
    let mut triplets = Vec::new();
    let mut rest = n;
    while rest > 0 {
        triplets.push(rest % 1000);
        rest /= 1000;
    }

    let mut words = String::new();
    for (scale, &triplet) in triplets.iter().enumerate().rev() {
        if triplet == 0 {
            continue;
        }
        if !words.is_empty() {
            if scale == 0 && triplet < 100 && !and_word.is_empty() {
                words.push(' ');
                words.push_str(and_word);
                words.push(' ');
            } else {
                words.push_str(", ");
            }
        }
        words.push_str(&hundreds(triplet, and_word));
        if scale > 0 {
            words.push(' ');
            words.push_str(SCALES[scale]);
        }
    }
    words
}

fn pairs(n: u64, zero_word: &str) -> String {
    let digits = n.to_string();
    let split = digits.len() % 2;

    let mut chunks: Vec<&str> = Vec::new();
    if split == 1 {
        chunks.push(&digits[..1]);
    }
    let mut at = split;
    while at < digits.len() {
        chunks.push(&digits[at..at + 2]);
        at += 2;
    }

    chunks
        .into_iter()
        .map(|chunk| {
            let bytes = chunk.as_bytes();
            let value = chunk.parse::<u64>().unwrap_or_default();
            match (bytes.len(), value) {
                (1, 0) => zero_word.to_string(),
                (_, 0) => format!("{zero_word} {zero_word}"),
                (2, v) if bytes[0] == b'0' => format!("{zero_word} {}", ONES[v as usize]),
                (_, v) => tens(v),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns the last word of a cardinal into its ordinal form.
fn ordinalize(words: &str) -> Option<String> {
    let cut = words.rfind([' ', '-']).map(|i| i + 1).unwrap_or(0);
    let (head, last) = words.split_at(cut);
    if last.is_empty() {
        return None;
    }

    let inflected = match last {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        _ => match last.strip_suffix('y') {
            Some(stem) => format!("{stem}ieth"),
            None => format!("{last}th"),
        },
    };
    Some(format!("{head}{inflected}"))
}
