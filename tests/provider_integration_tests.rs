use kitty_reader::Provider;
use kitty_reader::core::config::ResolvedConfig;
use kitty_reader::inference::{
    GeminiProvider, LocalProvider, ProviderError, SyllabificationProvider, build_provider,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

// ============================================================================
// Helper Functions
// ============================================================================

fn gemini_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new("test-key".to_string(), Some(server.uri()), None)
}

// ============================================================================
// Gemini Provider Tests
// ============================================================================

#[tokio::test]
async fn test_gemini_successful_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("ПРИ-ВЕТ, МИР!\n")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let words = provider_for(&mock_server)
        .process("Привет, мир!")
        .await
        .unwrap();

    assert_eq!(words.len(), 2);
    assert_eq!(words[0].display_text, "ПРИ-ВЕТ,");
    assert_eq!(words[0].syllables[0].text, "ПРИ");
    assert_eq!(words[0].syllables[1].text, "ВЕТ,");
    assert_eq!(words[1].id, "word-1");
    assert_eq!(words[1].syllables[0].id, "syllable-1-0");
}

#[tokio::test]
async fn test_gemini_request_carries_the_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("КОТ")))
        .mount(&mock_server)
        .await;

    provider_for(&mock_server).process("кот").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("\"кот\""));
}

#[tokio::test]
async fn test_gemini_joins_multiple_parts() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "МА-МА " }, { "text": "МЫ-ЛА РА-МУ" }] }
        }]
    });
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let words = provider_for(&mock_server).process("Мама мыла раму").await.unwrap();
    let display: Vec<&str> = words.iter().map(|w| w.display_text.as_str()).collect();
    assert_eq!(display, ["МА-МА", "МЫ-ЛА", "РА-МУ"]);
}

#[tokio::test]
async fn test_gemini_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).process("кот").await.unwrap_err();
    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_gemini_rejected_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
        })))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).process("кот").await.unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 403, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_gemini_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).process("кот").await.unwrap_err();
    assert!(matches!(err, ProviderError::Parse(_)));
}

#[tokio::test]
async fn test_gemini_empty_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).process("кот").await.unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn test_gemini_network_error() {
    // Port 1 is reserved and never listening
    let provider = GeminiProvider::new(
        "test-key".to_string(),
        Some("http://127.0.0.1:1".to_string()),
        None,
    );

    let err = provider.process("кот").await.unwrap_err();
    assert!(matches!(err, ProviderError::Network(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_gemini_custom_model_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("КОТ")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(
        "test-key".to_string(),
        Some(format!("{}/", mock_server.uri())),
        Some("gemini-test".to_string()),
    );
    let words = provider.process("кот").await.unwrap();
    assert_eq!(words[0].display_text, "КОТ");
}

// ============================================================================
// Composition Root
// ============================================================================

#[tokio::test]
async fn test_build_provider_routes_to_mock_gemini() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "from-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("КО-ТЕ-НОК")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ResolvedConfig {
        provider: Provider::Gemini,
        initial_text: String::new(),
        gemini_api_key: Some("from-config".to_string()),
        gemini_base_url: Some(mock_server.uri()),
        gemini_model: None,
    };
    let provider = build_provider(&config).unwrap();
    assert_eq!(provider.name(), "gemini");

    let words = provider.process("котенок").await.unwrap();
    assert_eq!(words[0].syllables.len(), 3);
}

#[tokio::test]
async fn test_local_and_gemini_agree_on_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("ПРИ-ВЕТ, МИР!")))
        .mount(&mock_server)
        .await;

    let local = LocalProvider::new().process("Привет, мир!").await.unwrap();
    let remote = provider_for(&mock_server)
        .process("Привет, мир!")
        .await
        .unwrap();
    assert_eq!(local, remote);
}
