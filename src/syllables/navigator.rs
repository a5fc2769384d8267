//! # Navigator
//!
//! A cursor over one `ProcessedText`, stepping a syllable at a time.
//!
//! ```text
//!   word-0        word-1
//! [ПРИ][ВЕТ,]   [МИР!]
//!   ●──next──▶●──next──▶●      (terminal: next() stays put)
//! ```
//!
//! The navigator owns its text; installing a new text means building a new
//! navigator, which starts at `{0, 0}`. An empty text has no position.

use super::types::{CurrentPosition, ProcessedText, Syllable, Word, total_syllables};

#[derive(Debug, Clone)]
pub struct Navigator {
    text: ProcessedText,
    position: CurrentPosition,
}

impl Navigator {
    pub fn new(text: ProcessedText) -> Self {
        Self {
            text,
            position: CurrentPosition::default(),
        }
    }

    pub fn text(&self) -> &ProcessedText {
        &self.text
    }

    /// Current cursor, or `None` when the text is empty.
    pub fn position(&self) -> Option<CurrentPosition> {
        self.current_syllable().map(|_| self.position)
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.text.get(self.position.word_index)
    }

    pub fn current_syllable(&self) -> Option<&Syllable> {
        self.current_word()?
            .syllables
            .get(self.position.syllable_index)
    }

    /// Steps forward one syllable, crossing into the next word when needed.
    ///
    /// Returns whether the cursor moved; at the last syllable of the last
    /// word it stays put and returns `false`.
    pub fn next(&mut self) -> bool {
        let Some(word) = self.current_word() else {
            return false;
        };
        let pos = self.position;

        if pos.syllable_index + 1 < word.syllables.len() {
            self.position.syllable_index += 1;
        } else if pos.word_index + 1 < self.text.len() {
            self.position = CurrentPosition::new(pos.word_index + 1, 0);
        } else {
            return false;
        }
        true
    }

    /// Steps back one syllable, landing on the previous word's last syllable
    /// when crossing a word boundary. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        let pos = self.position;

        if pos.syllable_index > 0 {
            self.position.syllable_index -= 1;
        } else if pos.word_index > 0 {
            let prev = pos.word_index - 1;
            let last = self.text[prev].syllables.len().saturating_sub(1);
            self.position = CurrentPosition::new(prev, last);
        } else {
            return false;
        }
        true
    }

    pub fn total_syllables(&self) -> usize {
        total_syllables(&self.text)
    }

    /// 0-based index of the current syllable in reading order.
    pub fn ordinal(&self) -> Option<usize> {
        self.position()?;
        let before: usize = self.text[..self.position.word_index]
            .iter()
            .map(Word::syllable_count)
            .sum();
        Some(before + self.position.syllable_index)
    }

    pub fn is_at_start(&self) -> bool {
        self.position() == Some(CurrentPosition::default())
    }

    pub fn is_at_end(&self) -> bool {
        match (self.ordinal(), self.total_syllables()) {
            (Some(ordinal), total) => ordinal + 1 == total,
            (None, _) => false,
        }
    }
}
