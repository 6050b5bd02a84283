use serde::{Deserialize, Serialize};

/// Successful chat response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChatResponse {
    pub fn new(response: String) -> Self {
        Self {
            response,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
///
/// Carries only user-safe text; upstream detail stays in the logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            retry_after: None,
            message: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn rate_limited(error: impl Into<String>, retry_after: impl Into<String>) -> Self {
        Self {
            retry_after: Some(retry_after.into()),
            ..Self::new(error)
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(error)
        }
    }
}
