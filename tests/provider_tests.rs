// Tests for the Gemini client and the client-side degradation path, using a
// mock upstream server.

use reunion_relay::config::GenerationSettings;
use reunion_relay::core::fallback;
use reunion_relay::services::{GeminiClient, ProviderError, RelayClient, TextGenerator};
use std::time::Duration;

fn client_for(server: &mockito::ServerGuard, api_key: Option<&str>) -> GeminiClient {
    GeminiClient::new(
        server.url(),
        api_key.map(|k| k.to_string()),
        "gemini-1.5-flash".to_string(),
        Duration::from_secs(5),
        GenerationSettings::default(),
    )
}

#[tokio::test]
async fn test_generate_extracts_first_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"parts":[{"text":"The gala dinner starts at 7pm."}]}}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server, Some("test-key"));
    let answer = client.generate("When is the gala?").await.unwrap();

    assert_eq!(answer, "The gala dinner starts at 7pm.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_sends_fixed_generation_params() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"generationConfig":{"temperature":0.7,"maxOutputTokens":500,"topP":0.8,"topK":40}}"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("test-key"));
    client.generate("hello").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_error_status_maps_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("internal upstream stack trace")
        .create_async()
        .await;

    let client = client_for(&server, Some("test-key"));
    let err = client.generate("hello").await.unwrap_err();

    match err {
        ProviderError::ApiError(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected ApiError, got {:?}", other),
    }
    // The upstream body never appears in the error shown to callers.
    assert!(!err.to_string().contains("stack trace"));
}

#[tokio::test]
async fn test_malformed_body_maps_to_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body("this is not json")
        .create_async()
        .await;

    let client = client_for(&server, Some("test-key"));
    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_missing_candidates_maps_to_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("test-key"));
    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_empty_candidate_text_yields_sorry_answer() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("test-key"));
    let answer = client.generate("hello").await.unwrap();
    assert_eq!(answer, "Sorry, I could not generate a response.");
}

#[tokio::test]
async fn test_empty_parts_array_maps_to_invalid_response() {
    // Gemini sends this shape for SAFETY/MAX_TOKENS finishes: candidates
    // present, but no text part to extract. That is a provider failure, not
    // an answer.
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[]}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("test-key"));
    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_missing_api_key_fails_without_network() {
    let server = mockito::Server::new_async().await;
    let client = client_for(&server, None);

    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::MissingApiKey));
}

#[tokio::test]
async fn test_relay_client_returns_server_answer() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response":"Shuttles leave at noon.","timestamp":"2025-08-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let client = RelayClient::new(server.url());
    assert_eq!(client.ask("shuttle times?").await, "Shuttles leave at noon.");
}

#[tokio::test]
async fn test_relay_outage_degrades_to_fallback_answer() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(500)
        .with_body(r#"{"error":"An error occurred processing your request. Please try again."}"#)
        .create_async()
        .await;

    let client = RelayClient::new(server.url());
    let answer = client.ask("What time is the shuttle?").await;

    // The user sees the canned transport answer, not an error.
    assert_eq!(answer, fallback::respond("What time is the shuttle?"));
    assert!(answer.contains("Swartz Bay"));
}

#[tokio::test]
async fn test_unreachable_relay_degrades_to_fallback_answer() {
    // Port 9 is discard; nothing is listening.
    let client = RelayClient::new("http://127.0.0.1:9".to_string());
    let answer = client.ask("how much is the fee?").await;
    assert_eq!(answer, fallback::respond("how much is the fee?"));
}
