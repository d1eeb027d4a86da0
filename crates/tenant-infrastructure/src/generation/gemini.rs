use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use tenant_core::generation::{ApiCredential, ContentGenerator, GeneratedContent, GenerationError};
use tenant_shared::config::GenerationSettings;

/// Gemini `generateContent` client producing structured landing page copy.
#[derive(Clone)]
pub struct GeminiContentGenerator {
    client: Client,
    base_url: String,
    model: String,
    credential: Option<ApiCredential>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

// Response Structures
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiContentGenerator {
    /// `raw_credential` is checked once here; an unusable value leaves the
    /// client unauthorized and every `generate` call fails without a request.
    pub fn new(settings: &GenerationSettings, raw_credential: Option<String>) -> Self {
        let credential = ApiCredential::resolve(raw_credential.as_deref()).ok();
        if credential.is_none() {
            warn!(
                "Gemini credential not provisioned (checked config and ${}), content generation disabled",
                settings.api_key_env
            );
        }

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(settings.timeout_seconds))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            credential,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    async fn request(&self, credential: &ApiCredential, description: &str, name: &str) -> Result<GeneratedContent> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: GeneratedContent::prompt(name, description),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: GeneratedContent::response_schema(),
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", credential.expose())
            .json(&request)
            .send()
            .await
            .context("Gemini network error")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, text);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            anyhow::bail!("Gemini returned no candidate text");
        }

        serde_json::from_str(text.trim()).context("Gemini candidate text is not the expected JSON")
    }
}

#[async_trait]
impl ContentGenerator for GeminiContentGenerator {
    async fn generate(&self, description: &str, name: &str) -> Result<GeneratedContent, GenerationError> {
        let credential = self.credential.as_ref().ok_or(GenerationError::Authentication)?;

        debug!(model = %self.model, "Requesting landing page content for {}", name);
        self.request(credential, description, name).await.map_err(|e| {
            error!("Gemini handshake failed: {:#}", e);
            GenerationError::Handshake
        })
    }

    fn is_authorized(&self) -> bool {
        self.credential.is_some()
    }
}
