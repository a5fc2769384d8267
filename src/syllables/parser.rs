//! # Parser
//!
//! Turns hyphenated text (the formatter's output, or a remote provider's)
//! into the structured `ProcessedText` the navigator walks.
//!
//! Whitespace is collapsed here: line breaks do not survive into the model.

use log::debug;

use super::types::{ProcessedText, Syllable, Word, word_id};

/// Splits one hyphenated token into its syllables.
///
/// Empty pieces (leading, trailing or doubled hyphens) are dropped. A token
/// made only of hyphens keeps itself as its single syllable so that every
/// word stays navigable.
fn parse_word(token: &str, word_index: usize) -> Word {
    let mut syllables: Vec<Syllable> = token
        .split('-')
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(syllable_index, piece)| Syllable::new(piece, word_index, syllable_index))
        .collect();

    if syllables.is_empty() {
        debug!("Token {:?} has no syllables, keeping it whole", token);
        syllables.push(Syllable::new(token, word_index, 0));
    }

    Word {
        id: word_id(word_index),
        display_text: token.to_string(),
        syllables,
    }
}

/// Parses whitespace-delimited, hyphenated text into words and syllables.
///
/// ```
/// use kitty_reader::syllables::parse;
///
/// let words = parse("ПРИ-ВЕТ, МИР!");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].syllables[1].text, "ВЕТ,");
/// ```
pub fn parse(hyphenated_text: &str) -> ProcessedText {
    hyphenated_text
        .split_whitespace()
        .enumerate()
        .map(|(word_index, token)| parse_word(token, word_index))
        .collect()
}
