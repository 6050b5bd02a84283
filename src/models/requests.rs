use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Chat request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(
        custom(function = not_blank),
        length(max = 1000, message = "Message too long. Maximum 1000 characters allowed.")
    )]
    pub message: String,
}

fn not_blank(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Message is required and must be a non-empty string".into());
        return Err(err);
    }
    Ok(())
}
