//! Client-side interface to the relay, with the fallback degradation path.
//!
//! Mirrors the widget contract: `get_ai_response` posts the message to the
//! relay, and `ask` never fails. Any non-success outcome from the relay is
//! answered locally by the keyword responder, so the end user always sees a
//! relevant reply even with the provider or network fully down.

use crate::core::fallback;
use crate::models::ChatResponse;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the relay
#[derive(Debug, Error)]
pub enum RelayClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("relay returned status {0}")]
    ApiError(reqwest::StatusCode),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the chat relay service
pub struct RelayClient {
    base_url: String,
    client: Client,
}

impl RelayClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Send a message to the relay and return the generated answer.
    pub async fn get_ai_response(&self, message: &str) -> Result<String, RelayClientError> {
        let url = format!("{}/api/chat", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(&json!({ "message": message }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayClientError::ApiError(status));
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|e| RelayClientError::InvalidResponse(format!("Failed to parse body: {}", e)))?;

        if data.response.is_empty() {
            return Ok("Sorry, I could not generate a response.".to_string());
        }

        Ok(data.response)
    }

    /// Deterministic local answer for `message`, no network involved.
    pub fn get_static_response(message: &str) -> &'static str {
        fallback::respond(message)
    }

    /// Ask the relay, degrading to the keyword responder on any failure.
    ///
    /// Total: always returns an answer, never an error.
    pub async fn ask(&self, message: &str) -> String {
        match self.get_ai_response(message).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Relay call failed, using fallback responder: {}", e);
                Self::get_static_response(message).to_string()
            }
        }
    }
}
