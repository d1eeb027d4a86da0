use serde_json::json;
use tenant_core::generation::{ContentGenerator, GenerationError};
use tenant_infrastructure::GeminiContentGenerator;
use tenant_shared::config::GenerationSettings;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

fn settings(server: &MockServer) -> GenerationSettings {
    GenerationSettings {
        base_url: server.uri(),
        model: "test-model".to_string(),
        api_key: None,
        api_key_env: "TENANT_TEST_UNUSED_KEY".to_string(),
        timeout_seconds: 5,
    }
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" }
        }]
    })
}

#[tokio::test]
async fn test_generate_returns_structured_content() {
    let server = MockServer::start().await;
    let content = json!({
        "heroTitle": "Better Coffee",
        "heroSubtitle": "Roasted daily",
        "aboutSection": "Seattle roaster since 2022.",
        "suggestedColor": "#8B4513"
    });

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "required": ["heroTitle", "heroSubtitle", "aboutSection", "suggestedColor"]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&format!("  {}\n", content))))
        .expect(1)
        .mount(&server)
        .await;

    let generator = GeminiContentGenerator::new(&settings(&server), Some("test-key".to_string()));
    assert!(generator.is_authorized());

    let generated = generator
        .generate("Artisanal coffee roaster", "Coffee Lab")
        .await
        .unwrap();

    assert_eq!(generated.hero_title, "Better Coffee");
    assert_eq!(generated.suggested_color, "#8B4513");
}

#[tokio::test]
async fn test_prompt_embeds_name_and_description() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{}")))
        .mount(&server)
        .await;

    let generator = GeminiContentGenerator::new(&settings(&server), Some("test-key".to_string()));
    let _ = generator.generate("Sourdough bakery", "Crumb & Co").await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("\"Crumb & Co\""));
    assert!(prompt.contains("\"Sourdough bakery\""));
}

#[tokio::test]
async fn test_unprovisioned_credential_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for raw in [None, Some(""), Some("undefined"), Some("PLACEHOLDER"), Some("${GEMINI_API_KEY}")] {
        let generator = GeminiContentGenerator::new(&settings(&server), raw.map(str::to_string));
        assert!(!generator.is_authorized());
        assert_eq!(
            generator.generate("desc", "name").await,
            Err(GenerationError::Authentication)
        );
    }
}

#[tokio::test]
async fn test_quota_error_maps_to_handshake() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429).set_body_string("RESOURCE_EXHAUSTED"))
        .mount(&server)
        .await;

    let generator = GeminiContentGenerator::new(&settings(&server), Some("test-key".to_string()));
    assert_eq!(
        generator.generate("desc", "name").await,
        Err(GenerationError::Handshake)
    );
}

#[tokio::test]
async fn test_unparseable_candidate_maps_to_handshake() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("Sure! Here is your copy.")))
        .mount(&server)
        .await;

    let generator = GeminiContentGenerator::new(&settings(&server), Some("test-key".to_string()));
    assert_eq!(
        generator.generate("desc", "name").await,
        Err(GenerationError::Handshake)
    );
}

#[tokio::test]
async fn test_missing_field_maps_to_handshake() {
    let server = MockServer::start().await;
    let partial = json!({ "heroTitle": "a", "heroSubtitle": "b", "aboutSection": "c" });

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&partial.to_string())))
        .mount(&server)
        .await;

    let generator = GeminiContentGenerator::new(&settings(&server), Some("test-key".to_string()));
    assert_eq!(
        generator.generate("desc", "name").await,
        Err(GenerationError::Handshake)
    );
}

#[tokio::test]
async fn test_empty_candidates_map_to_handshake() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let generator = GeminiContentGenerator::new(&settings(&server), Some("test-key".to_string()));
    assert_eq!(
        generator.generate("desc", "name").await,
        Err(GenerationError::Handshake)
    );
}
