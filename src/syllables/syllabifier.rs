//! # Syllabifier
//!
//! Splits a single word into hyphen-separated syllables using vowel groups.
//!
//! ```text
//! К О Т Е Н О К
//!   ^   ^   ^        vowel groups
//!    Т   Н           one consonant between groups → break before it
//! КО-ТЕ-НОК
//! ```
//!
//! Rules per boundary between two vowel groups:
//!
//! - one consonant: break before it (`V-CV`)
//! - two or more: break after the first (`VC-CV`, `VC-CCV`)
//! - none: no break
//!
//! This is an approximation tuned for early readers, not a phonological model.

use std::collections::BTreeSet;
use std::ops::Range;

use super::alphabet::is_vowel;

/// Maximal runs of vowels, as char index ranges.
fn vowel_groups(chars: &[char]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &c) in chars.iter().enumerate() {
        match (is_vowel(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                groups.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        groups.push(s..chars.len());
    }
    groups
}

/// Char indices where a hyphen goes, sorted and deduplicated.
fn break_points(chars: &[char]) -> BTreeSet<usize> {
    let groups = vowel_groups(chars);
    let mut breaks = BTreeSet::new();

    for pair in groups.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let consonants_between = next.start - prev.end;
        match consonants_between {
            0 => {}
            1 => {
                breaks.insert(next.start - 1);
            }
            _ => {
                breaks.insert(prev.end + 1);
            }
        }
    }

    // A break at either edge would leave an empty syllable
    breaks.retain(|&b| b > 0 && b < chars.len());
    breaks
}

/// Returns `word` with a hyphen between each detected syllable.
///
/// Words with fewer than two vowel groups come back unchanged. Vowel
/// detection ignores case; the output keeps the input's casing.
///
/// ```
/// use kitty_reader::syllables::syllabify;
///
/// assert_eq!(syllabify("КОТЕНОК"), "КО-ТЕ-НОК");
/// assert_eq!(syllabify("КОТ"), "КОТ");
/// ```
pub fn syllabify(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let breaks = break_points(&chars);
    if breaks.is_empty() {
        return word.to_string();
    }

    let mut out = String::with_capacity(word.len() + breaks.len());
    for (i, c) in chars.iter().enumerate() {
        if breaks.contains(&i) {
            out.push('-');
        }
        out.push(*c);
    }
    out
}
