use serde::{Deserialize, Serialize};

/// One syllable of a word, addressed by its `syllable-{word}-{syllable}` id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub text: String,
    pub id: String,
}

impl Syllable {
    pub fn new(text: impl Into<String>, word_index: usize, syllable_index: usize) -> Self {
        Self {
            text: text.into(),
            id: syllable_id(word_index, syllable_index),
        }
    }
}

/// A word in reading order.
///
/// `display_text` keeps the hyphenated form with its punctuation attached
/// (e.g. `"ПРИ-ВЕТ,"`), while `syllables` holds the pieces the reader steps
/// through. `syllables` is never empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: String,
    #[serde(rename = "displayText")]
    pub display_text: String,
    pub syllables: Vec<Syllable>,
}

impl Word {
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }
}

/// Structured text: words in reading order. Navigation relies on index order only.
pub type ProcessedText = Vec<Word>;

/// Cursor into a `ProcessedText`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentPosition {
    #[serde(rename = "wordIndex")]
    pub word_index: usize,
    #[serde(rename = "syllableIndex")]
    pub syllable_index: usize,
}

impl CurrentPosition {
    pub const fn new(word_index: usize, syllable_index: usize) -> Self {
        Self {
            word_index,
            syllable_index,
        }
    }
}

pub fn word_id(word_index: usize) -> String {
    format!("word-{word_index}")
}

pub fn syllable_id(word_index: usize, syllable_index: usize) -> String {
    format!("syllable-{word_index}-{syllable_index}")
}

/// Total number of syllables across all words.
pub fn total_syllables(text: &[Word]) -> usize {
    text.iter().map(Word::syllable_count).sum()
}
