//! Gemini `generateContent` backend.
//!
//! Structured requests set `responseMimeType: application/json` and pass the
//! schema through as `responseSchema`. The reply text is the concatenation of
//! the text parts of the first candidate.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::{GenerationConfig, SecureString};

use super::backend::{Completion, CompletionBackend, CompletionRequest};
use super::error::BackendError;

/// Client for the Gemini REST API.
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: SecureString,
}

impl GeminiBackend {
    /// Create a backend from config and a resolved key.
    pub fn new(config: &GenerationConfig, api_key: SecureString) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Get the model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn build_body(request: CompletionRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config: request.schema.map(|schema| GenerationSettings {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BackendError> {
        let structured = request.schema.is_some();
        let prompt_len = request.prompt.len();
        let body = Self::build_body(request);
        let url = self.endpoint();

        tracing::debug!(
            url = %url,
            model = %self.model,
            structured,
            prompt_len,
            "Sending generation request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Generation API error"
            );

            return Err(BackendError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        let text = extract_text(parsed)?;
        tracing::debug!(latency_ms, text_len = text.len(), "Generation response received");

        Ok(Completion { text })
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, BackendError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(BackendError::EmptyResponse);
    }
    Ok(text)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationSettings>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
