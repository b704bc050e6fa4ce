//! Abbreviation expansion tables, one per locale.
//!
//! An abbreviation matches case-insensitively at a word boundary and must
//! end with a period, which is consumed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::locale::Locale;

fn table(entries: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    entries
        .iter()
        .map(|&(abbreviation, expansion)| {
            let pattern = format!(r"(?i)\b{}\.", regex::escape(abbreviation));
            (Regex::new(&pattern).unwrap(), expansion)
        })
        .collect()
}

lazy_static! {
    static ref ENGLISH: Vec<(Regex, &'static str)> = table(&[
        ("mrs", "misess"),
        ("mr", "mister"),
        ("dr", "doctor"),
        ("st", "saint"),
        ("co", "company"),
        ("jr", "junior"),
        ("maj", "major"),
        ("gen", "general"),
        ("drs", "doctors"),
        ("rev", "reverend"),
        ("lt", "lieutenant"),
        ("hon", "honorable"),
        ("sgt", "sergeant"),
        ("capt", "captain"),
        ("esq", "esquire"),
        ("ltd", "limited"),
        ("col", "colonel"),
        ("ft", "fort"),
    ]);

    static ref AZERBAIJANI: Vec<(Regex, &'static str)> = table(&[
        ("vb", "vəbənzəri"),
        ("vs", "vəsairə"),
        ("mm", "milimetrə"),
        ("kq", "kiloqram"),
        ("km", "kilometrə"),
        ("mq", "miliqram"),
    ]);

    static ref TURKISH: Vec<(Regex, &'static str)> = table(&[
        ("vb", "ve benzeri"),
        ("vs", "vesaire"),
        ("mm", "milimetre"),
        ("kg", "kilogram"),
        ("km", "kilometre"),
        ("mg", "miligram"),
    ]);
}

fn abbreviations_for(locale: Locale) -> &'static [(Regex, &'static str)] {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Azerbaijani => &AZERBAIJANI,
        Locale::Turkish => &TURKISH,
    }
}

pub fn expand_abbreviations(text: &str, locale: Locale) -> String {
    let mut text = text.to_string();
    for (pattern, expansion) in abbreviations_for(locale) {
        text = pattern.replace_all(&text, *expansion).into_owned();
    }
    text
}
