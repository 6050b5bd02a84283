//! Reunion Relay - chat relay and fallback responder for the reunion website
//!
//! This library provides the server side of the reunion assistant: a thin
//! relay that validates free-text questions, rate-limits by client address,
//! forwards an assembled prompt to the Gemini API, and a deterministic
//! keyword-matched responder clients use whenever the relay is unreachable.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{build_prompt, respond, RateDecision, RateLimiter, REUNION_CONTEXT};
pub use self::models::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse};
pub use self::services::{GeminiClient, ProviderError, RelayClient, TextGenerator};
