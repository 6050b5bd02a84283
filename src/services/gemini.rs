use crate::config::{GeminiSettings, GenerationSettings};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the generative-text provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    ApiError(reqwest::StatusCode),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    #[error("provider API key is not configured")]
    MissingApiKey,
}

/// Narrow provider seam: one prompt in, one answer out.
///
/// Handlers depend on this trait rather than the concrete Gemini client so
/// tests can substitute a stub without touching relay logic.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "topK")]
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Gemini generateContent API client
///
/// Issues a single attempt per prompt with fixed generation parameters and a
/// bounded timeout; retry policy belongs to the caller. Constructed even when
/// the API key is absent so that a misconfigured deployment fails each request
/// with a safe error instead of refusing to start.
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    generation: GenerationSettings,
    client: Client,
}

impl GeminiClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
        generation: GenerationSettings,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            generation,
            client,
        }
    }

    pub fn from_settings(settings: &GeminiSettings) -> Self {
        Self::new(
            settings.base_url.clone(),
            settings.api_key.clone(),
            settings.model.clone(),
            Duration::from_secs(settings.timeout_secs),
            settings.generation.clone(),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.generation.temperature,
                max_output_tokens: self.generation.max_output_tokens,
                top_p: self.generation.top_p,
                top_k: self.generation.top_k,
            },
        };

        tracing::debug!("Calling Gemini model {} ({} prompt chars)", self.model, prompt.len());

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: status={}, body={}", status, error_body);
            return Err(ProviderError::ApiError(status));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse body: {}", e)))?;

        let content = data
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .ok_or_else(|| {
                ProviderError::InvalidResponse("missing candidates or content".to_string())
            })?;

        // A missing text part is a malformed upstream response; only a
        // present-but-empty string maps to the canned apology.
        let text = content
            .parts
            .first()
            .and_then(|p| p.text.clone())
            .ok_or_else(|| {
                ProviderError::InvalidResponse("missing text in first candidate".to_string())
            })?;

        if text.is_empty() {
            return Ok("Sorry, I could not generate a response.".to_string());
        }

        Ok(text)
    }
}
