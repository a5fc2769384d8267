//! # Syllable Engine
//!
//! The local, synchronous pipeline behind the reader. Pure functions, no I/O.
//!
//! ```text
//! raw text ──format()──▶ "ПРИ-ВЕТ, МИР!" ──parse()──▶ ProcessedText ──▶ Navigator
//!              │
//!              └── syllabify() per word
//! ```
//!
//! ## Modules
//!
//! - [`syllabifier`]: one word → hyphenated word
//! - [`formatter`]: whole text → uppercased, hyphenated text (whitespace kept)
//! - [`parser`]: hyphenated text → words and syllables with stable ids
//! - [`navigator`]: next/previous cursor over the parsed words

mod alphabet;
pub mod formatter;
pub mod navigator;
pub mod parser;
pub mod syllabifier;
pub mod types;

pub use formatter::format;
pub use navigator::Navigator;
pub use parser::parse;
pub use syllabifier::syllabify;
pub use types::{CurrentPosition, ProcessedText, Syllable, Word};

/// Formats and parses `text` in one go. Never fails; empty input gives an empty text.
pub fn process(text: &str) -> ProcessedText {
    parse(&format(text))
}
