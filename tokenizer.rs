use once_cell::sync::Lazy;
use regex::Regex;

// Punctuation plus ASCII whitespace (space, \t, \n, \x0B, \x0C, \r).
static DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[&.,:;!?\[\] \t\n\x0B\x0C\r]+").unwrap());

/// Split one line into lower-cased word tokens.
///
/// No state is kept between calls, so calling this again on the same line
/// yields the same tokens. Delimiter runs never produce empty tokens.
pub fn tokenize(line: &str) -> std::vec::IntoIter<String> {
    // Lower-case the whole line first: final sigma depends on what follows
    // the letter, delimiters included.
    let lower = line.to_lowercase();
    DELIMITERS
        .split(&lower)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect::<Vec<_>>()
        .into_iter()
}
