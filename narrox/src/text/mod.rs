//! Text stages that the cleaners are assembled from.

pub mod abbreviations;
pub mod cleaners;

use deunicode::deunicode;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Every whitespace run becomes a single space. Ends are not trimmed.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}

/// Best-effort ASCII transliteration.
pub fn convert_to_ascii(text: &str) -> String {
    deunicode(text)
}

/// Maps the schwa to `w` so it survives transliteration as its own letter.
pub fn replace_schwa(text: &str) -> String {
    text.replace(['ə', 'Ə'], "w")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b\t\tc\n\nd"), "a b c d");
        assert_eq!(collapse_whitespace("  padded  "), " padded ");
    }

    #[test]
    fn test_convert_to_ascii() {
        assert_eq!(convert_to_ascii("Café Ölçü"), "Cafe Olcu");
        assert_eq!(convert_to_ascii("plain"), "plain");
    }

    #[test]
    fn test_replace_schwa() {
        assert_eq!(replace_schwa("Əli gəldi"), "wli gwldi");
    }
}
