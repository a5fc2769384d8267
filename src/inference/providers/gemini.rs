//! Gemini provider using the `generateContent` REST endpoint.
//!
//! The model is asked to do the whole job (uppercase + hyphenate) and its
//! answer goes through the same parser as the local heuristic, so the rest
//! of the app cannot tell the two apart.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use async_trait::async_trait;

use crate::inference::{ProviderError, SyllabificationProvider};
use crate::syllables::{self, ProcessedText};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

// ============================================================================
// Gemini API Types
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

/// The request body for `models/{model}:generateContent`
#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Builds the instruction sent to the model for `text`.
fn build_prompt(text: &str) -> String {
    format!(
        "Take the following text, convert it to all uppercase, and then split each word \
         into syllables separated by a hyphen '-'. Punctuation should be kept with its word, \
         and words separated by newline should be kept on separate lines. For example, \
         'Привет, как дела?' should become 'ПРИ-ВЕТ, КАК ДЕ-ЛА?'. \
         The text to process is: \"{text}\""
    )
}

/// Concatenates the text parts of the first candidate.
fn response_text(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider.
    ///
    /// # Arguments
    /// * `api_key` - Google AI Studio API key
    /// * `base_url` - Optional custom base URL (defaults to the public v1beta API)
    /// * `model` - Optional model name (defaults to `gemini-2.5-flash`)
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl SyllabificationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn process(&self, text: &str) -> Result<ProcessedText, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(text),
                }],
            }],
        };

        info!(
            "Gemini generateContent request: model={}, text_len={}",
            self.model,
            text.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Gemini API error: {} - {}", status, err_body);
            return Err(ProviderError::Api {
                status,
                message: err_body,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let hyphenated = response_text(body).ok_or(ProviderError::EmptyResponse)?;
        debug!("Gemini syllabified text: {}", hyphenated);

        Ok(syllables::parse(&hyphenated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = build_prompt("Мама мыла раму");
        assert!(prompt.contains("\"Мама мыла раму\""));
        assert!(prompt.contains("uppercase"));
    }

    #[test]
    fn test_request_serializes_contents_parts() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hi".to_string(),
                }],
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"hi"}]}]}"#);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"ПРИ-ВЕТ, "},{"text":"МИР!\n"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response_text(response).as_deref(), Some("ПРИ-ВЕТ, МИР!"));
    }

    #[test]
    fn test_response_text_empty_cases() {
        let none: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response_text(none).is_none());

        let blank: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert!(response_text(blank).is_none());

        let no_content: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(response_text(no_content).is_none());
    }

    #[test]
    fn test_endpoint_defaults() {
        let provider = GeminiProvider::new("key".to_string(), None, None);
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );

        let custom = GeminiProvider::new(
            "key".to_string(),
            Some("http://localhost:9000/".to_string()),
            Some("gemini-test".to_string()),
        );
        assert_eq!(
            custom.endpoint(),
            "http://localhost:9000/models/gemini-test:generateContent"
        );
    }
}
