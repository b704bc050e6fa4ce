use regex::{Captures, Regex};

use crate::error::Result;

/// Replaces every non-overlapping match of `pattern` with `handler`'s output.
///
/// Matches are visited leftmost first, text between them is copied through
/// untouched. Unlike `Regex::replace_all` the handler may fail, and the
/// first failure aborts the whole rewrite.
pub fn rewrite<F>(text: &str, pattern: &Regex, mut handler: F) -> Result<String>
where
    F: FnMut(&Captures<'_>) -> Result<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        out.push_str(&handler(&caps)?);
        last = whole.end();
    }
    out.push_str(&text[last..]);

    Ok(out)
}
