use std::fmt;

use async_trait::async_trait;

use crate::syllables::ProcessedText;

/// Errors that can occur while a provider syllabifies text.
/// The local heuristic never produces one; remote providers can.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key, bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response. Not retryable.
    Parse(String),
    /// The provider answered without any text to parse.
    EmptyResponse,
}

impl ProviderError {
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Network(_) => true,
            ProviderError::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
            ProviderError::EmptyResponse => write!(f, "empty response"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// The "text → syllabified text" boundary the application is composed around.
#[async_trait]
pub trait SyllabificationProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Turns raw user text into words and syllables.
    async fn process(&self, text: &str) -> Result<ProcessedText, ProviderError>;
}
