//! # Formatter
//!
//! Runs the syllabifier over a whole text while keeping everything that is
//! not a word exactly where it was: whitespace runs (including line breaks)
//! and trailing punctuation come through verbatim.
//!
//! ```text
//! "Привет, мир!\n"  →  "ПРИ-ВЕТ, МИР!\n"
//! ```

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::alphabet::LETTER_CLASS;
use super::syllabifier::syllabify;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A word token: leading letters, then only non-letters (punctuation) to the end.
static RE_WORD_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^([{LETTER_CLASS}]+)([^{LETTER_CLASS}]*)$")).unwrap()
});

/// Splits `text` into alternating word and whitespace tokens.
///
/// Concatenating the result gives back `text` unchanged.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in RE_WHITESPACE.find_iter(text) {
        if m.start() > last {
            tokens.push(&text[last..m.start()]);
        }
        tokens.push(m.as_str());
        last = m.end();
    }
    if last < text.len() {
        tokens.push(&text[last..]);
    }
    tokens
}

/// Syllabifies the letter run of a word token and reattaches its suffix.
///
/// Tokens that are not "letters then non-letters" (pure punctuation,
/// digits, `"ABC,DEF"`) pass through unchanged.
fn format_token(token: &str) -> String {
    match RE_WORD_TOKEN.captures(token) {
        Some(caps) => {
            let letters = &caps[1];
            let suffix = &caps[2];
            format!("{}{}", syllabify(letters), suffix)
        }
        None => {
            trace!("Passing through non-word token {:?}", token);
            token.to_string()
        }
    }
}

/// Uppercases `text` and hyphenates every word in it.
///
/// The output has the same words, in the same order, with the same
/// non-letter content; it differs only by casing and inserted hyphens.
pub fn format(text: &str) -> String {
    let upper = text.to_uppercase();
    tokenize(&upper)
        .into_iter()
        .map(|token| {
            if token.chars().all(char::is_whitespace) {
                token.to_string()
            } else {
                format_token(token)
            }
        })
        .collect()
}
