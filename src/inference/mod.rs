//! # Providers
//!
//! Anything that can turn raw text into a `ProcessedText` sits behind
//! [`SyllabificationProvider`]. The local heuristic is the default; Gemini
//! is an optional remote alternative with the same contract.

pub mod provider;
pub mod providers;

pub use provider::{ProviderError, SyllabificationProvider};
pub use providers::{GeminiProvider, LocalProvider};

use std::sync::Arc;

use log::info;

use crate::Provider;
use crate::core::config::ResolvedConfig;

/// Build a provider from a resolved config's provider choice and credentials.
///
/// This is the one place a provider is chosen; everything downstream only
/// sees the trait object.
pub fn build_provider(
    config: &ResolvedConfig,
) -> Result<Arc<dyn SyllabificationProvider>, ProviderError> {
    let provider: Arc<dyn SyllabificationProvider> = match config.provider {
        Provider::Local => Arc::new(LocalProvider::new()),
        Provider::Gemini => {
            let api_key = config.gemini_api_key.clone().ok_or_else(|| {
                ProviderError::Config(
                    "Gemini API key must be set (config file, GEMINI_API_KEY env var, or --provider local)"
                        .to_string(),
                )
            })?;
            Arc::new(GeminiProvider::new(
                api_key,
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
            ))
        }
    };
    info!("Using provider: {}", provider.name());
    Ok(provider)
}
