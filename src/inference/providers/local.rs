//! The built-in heuristic provider. Runs the syllable engine in-process.

use async_trait::async_trait;
use log::debug;

use crate::inference::{ProviderError, SyllabificationProvider};
use crate::syllables::{self, ProcessedText};

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SyllabificationProvider for LocalProvider {
    fn name(&self) -> &str {
        "local"
    }

    async fn process(&self, text: &str) -> Result<ProcessedText, ProviderError> {
        let words = syllables::process(text);
        debug!(
            "Local syllabification: {} chars -> {} words",
            text.chars().count(),
            words.len()
        );
        Ok(words)
    }
}
