use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::{Validate, ValidationErrors};

use crate::core::{prompt, RateDecision, RateLimiter};
use crate::models::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse};
use crate::services::TextGenerator;
use std::sync::Arc;

/// Generic message returned for any provider or internal failure.
/// Upstream detail never reaches the client.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred processing your request. Please try again.";

const RATE_LIMIT_MESSAGE: &str = "Too many requests from this IP, please try again later.";
const RATE_LIMIT_RETRY_AFTER: &str = "15 minutes";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TextGenerator>,
    pub limiter: Arc<RateLimiter>,
}

/// Configure all relay routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/chat", web::post().to(chat));
}

/// Health check endpoint
///
/// Always reports healthy, independent of limiter or provider state.
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Chat relay endpoint
///
/// POST /api/chat
///
/// Request body:
/// ```json
/// {
///   "message": "string"
/// }
/// ```
///
/// Exactly one response path per request: 200 with generated text, 400 for
/// invalid input, 429 over quota, or 500 for provider failure.
async fn chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    let client_addr = http_req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    // Quota check comes first: an over-limit address never reaches
    // validation or the provider.
    if let RateDecision::Limited { retry_after } = state.limiter.check(&client_addr) {
        tracing::info!(
            "Rate limit exceeded for {} (retry in {}s)",
            client_addr,
            retry_after.as_secs()
        );
        return HttpResponse::TooManyRequests().json(ErrorResponse::rate_limited(
            RATE_LIMIT_MESSAGE,
            RATE_LIMIT_RETRY_AFTER,
        ));
    }

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for chat request from {}: {}", client_addr, errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(validation_message(&errors)));
    }

    let prompt = prompt::build_prompt(&req.message);

    match state.provider.generate(&prompt).await {
        Ok(answer) => {
            tracing::debug!("Chat answered for {} ({} chars)", client_addr, answer.len());
            HttpResponse::Ok().json(ChatResponse::new(answer))
        }
        Err(e) => {
            tracing::error!("Chat API error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(GENERIC_FAILURE_MESSAGE))
        }
    }
}

/// Handler for unmatched routes
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::with_message(
        "Endpoint not found",
        "The requested endpoint does not exist.",
    ))
}

/// First user-facing message out of a validation failure.
fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Message is required and must be a non-empty string".to_string())
}
