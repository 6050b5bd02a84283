mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::header, middleware, web, App, HttpResponse, HttpServer};
use config::{CorsSettings, Settings};
use core::RateLimiter;
use models::ErrorResponse;
use routes::AppState;
use services::{GeminiClient, TextGenerator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Handle JSON payload errors
///
/// A body without a textual `message` field never reaches the handler; the
/// extractor rejects it here with the same user-safe string the handler uses
/// for blank input.
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest()
            .json(ErrorResponse::new("Message is required and must be a non-empty string")),
    )
    .into()
}

/// Build the CORS policy from the configured allow-list.
///
/// Exact origins plus a small set of hosting-domain suffixes; only GET, POST
/// and OPTIONS, credentials never sent.
fn build_cors(settings: &CorsSettings) -> Cors {
    let suffixes = settings.allowed_origin_suffixes.clone();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600);

    for origin in &settings.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors.allowed_origin_fn(move |origin, _req_head| {
        origin
            .to_str()
            .map(|o| suffixes.iter().any(|s| o.ends_with(s.as_str())))
            .unwrap_or(false)
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting reunion chatbot relay...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the provider client. A missing key is a configuration
    // fault, not a startup failure: every chat request will get the generic
    // error until the key is supplied.
    let gemini = GeminiClient::from_settings(&settings.gemini);
    if !gemini.has_api_key() {
        warn!("GEMINI_API_KEY is not set; chat requests will fail with a generic error");
    }
    let provider: Arc<dyn TextGenerator> = Arc::new(gemini);

    info!("Gemini client initialized (model: {})", settings.gemini.model);

    // Initialize the per-address rate limiter
    let limiter = Arc::new(RateLimiter::new(
        Duration::from_secs(settings.rate_limit.window_secs),
        settings.rate_limit.max_requests,
    ));

    info!(
        "Rate limiter initialized ({} requests per {}s window)",
        settings.rate_limit.max_requests, settings.rate_limit.window_secs
    );

    // Build application state
    let app_state = AppState { provider, limiter };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let cors_settings = settings.cors.clone();

    info!("Starting HTTP server on {}:{}", host, port);
    info!("Health check: http://{}:{}/health", host, port);
    info!("Chat API: http://{}:{}/api/chat", host, port);

    HttpServer::new(move || {
        let cors = build_cors(&cors_settings);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
