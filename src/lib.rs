//! Kitty Reader: step through a text one syllable at a time.
//!
//! The [`syllables`] module is the engine; [`core`] holds UI-agnostic app
//! state; [`inference`] provides the pluggable text → syllables boundary;
//! [`tui`] is the terminal front end.

use clap::ValueEnum;

pub mod core;
pub mod inference;
pub mod syllables;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    /// Built-in vowel-group heuristic (offline)
    #[default]
    Local,
    /// Google Gemini over HTTPS
    Gemini,
}

impl Provider {
    /// Looks a provider up by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}
