//! Letter and vowel sets shared by the syllabifier and the formatter.
//!
//! Covers Cyrillic (including Ё), basic Latin and the German umlauts.
//! Matching is case-insensitive; both cases are listed explicitly so that
//! no Unicode case folding is needed at lookup time.

/// Vowels: Cyrillic, umlauted Latin, plain Latin. `Y` counts as a consonant.
const VOWELS: &str = "АЕЁИОУЫЭЮЯаеёиоуыэюяÄÖÜäöüAEIOUaeiou";

/// Character class body for a single letter, used inside regex brackets.
pub const LETTER_CLASS: &str = "a-zA-Zа-яА-ЯёЁäöüÄÖÜß";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}
