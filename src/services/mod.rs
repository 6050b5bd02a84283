// Service exports
pub mod gemini;
pub mod relay_client;

pub use gemini::{GeminiClient, ProviderError, TextGenerator};
pub use relay_client::{RelayClient, RelayClientError};
