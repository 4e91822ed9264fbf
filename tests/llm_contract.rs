//! OpenAI chat-completions contract tests
//!
//! A wiremock server stands in for the API so these check the request we
//! send and how each failure response is classified.

use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use todo_digest::ai::LlmClient;
use todo_digest::ai::prompt_builder::SYSTEM_PROMPT;
use todo_digest::core::models::Task;
use todo_digest::errors::{RemoteGenerationError, SummarizeError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pending() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            text: "Complete project documentation".to_string(),
            completed: false,
            created_at: Utc::now(),
        },
        Task {
            id: 2,
            text: "Review code changes".to_string(),
            completed: false,
            created_at: Utc::now(),
        },
    ]
}

fn client_for(server: &MockServer, timeout: Duration) -> LlmClient {
    LlmClient::new(
        Some("test-key".to_string()),
        Some("org-123".to_string()),
        "gpt-3.5-turbo".to_string(),
        server.uri(),
        timeout,
    )
}

async fn summarize_with_response(response: ResponseTemplate) -> Result<String, SummarizeError> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, Duration::from_secs(5))
        .generate_summary(&pending())
        .await
}

#[tokio::test]
async fn test_request_format_and_trimmed_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("openai-organization", "org-123"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 300,
            "temperature": 0.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "\n*Team update*: docs and review.\n" },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = client_for(&server, Duration::from_secs(5))
        .generate_summary(&pending())
        .await
        .unwrap();

    assert_eq!(summary, "*Team update*: docs and review.");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
    assert_eq!(body["messages"][1]["role"], "user");
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("- Complete project documentation\n- Review code changes"));
}

#[tokio::test]
async fn test_quota_error_is_classified() {
    let result = summarize_with_response(ResponseTemplate::new(429).set_body_json(json!({
        "error": { "code": "insufficient_quota", "message": "You exceeded your current quota" }
    })))
    .await;

    assert_eq!(
        result,
        Err(SummarizeError::Remote(RemoteGenerationError::QuotaExceeded))
    );
}

#[tokio::test]
async fn test_invalid_key_is_classified() {
    let result = summarize_with_response(ResponseTemplate::new(401).set_body_json(json!({
        "error": { "code": "invalid_api_key", "message": "Incorrect API key provided" }
    })))
    .await;

    assert_eq!(
        result,
        Err(SummarizeError::Remote(RemoteGenerationError::InvalidCredential))
    );
}

#[tokio::test]
async fn test_rate_limit_is_classified() {
    let result = summarize_with_response(ResponseTemplate::new(429).set_body_json(json!({
        "error": { "code": "rate_limit_exceeded", "message": "Slow down" }
    })))
    .await;

    assert_eq!(
        result,
        Err(SummarizeError::Remote(RemoteGenerationError::RateLimited))
    );
}

#[tokio::test]
async fn test_server_error_collapses_to_other() {
    let result =
        summarize_with_response(ResponseTemplate::new(500).set_body_string("upstream failure"))
            .await;

    assert!(matches!(
        result,
        Err(SummarizeError::Remote(RemoteGenerationError::Other(_)))
    ));
}

#[tokio::test]
async fn test_malformed_response_collapses_to_other() {
    let result =
        summarize_with_response(ResponseTemplate::new(200).set_body_string("not json")).await;
    assert!(matches!(
        result,
        Err(SummarizeError::Remote(RemoteGenerationError::Other(_)))
    ));

    let result =
        summarize_with_response(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .await;
    assert!(matches!(
        result,
        Err(SummarizeError::Remote(RemoteGenerationError::Other(_)))
    ));
}

#[tokio::test]
async fn test_timeout_collapses_to_other() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({ "choices": [{ "message": { "content": "late" } }] })),
        )
        .mount(&server)
        .await;

    let result = client_for(&server, Duration::from_millis(200))
        .generate_summary(&pending())
        .await;

    assert!(matches!(
        result,
        Err(SummarizeError::Remote(RemoteGenerationError::Other(_)))
    ));
}
