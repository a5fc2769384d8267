//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::inference::{ProviderError, SyllabificationProvider};
use crate::syllables::{self, ProcessedText};

/// Answers synchronously with the local engine, under its own name.
pub struct StaticProvider;

#[async_trait]
impl SyllabificationProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn process(&self, text: &str) -> Result<ProcessedText, ProviderError> {
        Ok(syllables::process(text))
    }
}

/// Always fails with a network error.
pub struct FailingProvider;

#[async_trait]
impl SyllabificationProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn process(&self, _text: &str) -> Result<ProcessedText, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}

/// Creates a test App with a StaticProvider and a short initial text.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StaticProvider), "Привет, мир!".to_string())
}
