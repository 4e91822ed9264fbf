//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the single chat-completions call used to turn pending todos
//! into a team-update summary, and normalizes its failures.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info};

use super::prompt_builder::build_prompt;
use crate::core::config::AppConfig;
use crate::core::models::Task;
use crate::digest::Summarizer;
use crate::errors::{RemoteGenerationError, SummarizeError};

pub const MAX_OUTPUT_TOKENS: u32 = 300;
pub const TEMPERATURE: f64 = 0.7;

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: Option<String>,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
    timeout: Duration,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        api_key: Option<String>,
        org_id: Option<String>,
        model_name: String,
        base_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            api_key,
            org_id,
            model_name,
            base_url,
            timeout,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.model_name().to_string(),
            config.openai_base_url.clone(),
            config.openai_timeout,
        )
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Sends exactly one chat-completions request for `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::Unconfigured`] when no API key is set, and a
    /// classified [`RemoteGenerationError`] when the request fails, times
    /// out, or the response carries no usable text.
    pub async fn generate_summary(&self, tasks: &[Task]) -> Result<String, SummarizeError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SummarizeError::Unconfigured);
        };

        let prompt = build_prompt(tasks);

        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating summary for {} pending todos with model {}",
            tasks.len(),
            self.model_name
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_messages_from_prompt(&prompt),
            "max_tokens": MAX_OUTPUT_TOKENS,
            "temperature": TEMPERATURE,
        });

        let client = Client::builder().timeout(self.timeout).build().map_err(|e| {
            RemoteGenerationError::Other(format!("Failed to build OpenAI HTTP client: {e}"))
        })?;

        let mut request = client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request_body);
        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request.send().await.map_err(RemoteGenerationError::from)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            error!(status = status.as_u16(), body = %error_text, "OpenAI API error");
            return Err(classify_failure(status.as_u16(), &error_text).into());
        }

        let response_json: Value = response.json().await.map_err(|e| {
            RemoteGenerationError::Other(format!("Failed to parse OpenAI response: {e}"))
        })?;

        extract_completion_text(&response_json)
            .ok_or_else(|| RemoteGenerationError::Other("No text in response".to_string()).into())
    }
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(&self, tasks: &[Task]) -> Result<String, SummarizeError> {
        self.generate_summary(tasks).await
    }
}

/// Maps a failed `OpenAI` response onto the error subkinds callers act on.
///
/// The body's `error.code` wins over the status code, so a quota error
/// delivered as HTTP 429 is reported as quota rather than rate limiting.
#[must_use]
pub fn classify_failure(status: u16, body: &str) -> RemoteGenerationError {
    let code = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error")
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
    });

    match code.as_deref() {
        Some("insufficient_quota") => RemoteGenerationError::QuotaExceeded,
        Some("invalid_api_key") => RemoteGenerationError::InvalidCredential,
        _ if status == 429 => RemoteGenerationError::RateLimited,
        _ => RemoteGenerationError::Other(format!("OpenAI API error (status {status})")),
    }
}

/// First choice's message content, trimmed. Blank content counts as missing.
#[must_use]
pub fn extract_completion_text(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

pub(crate) fn build_chat_messages_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            match &m.content {
                Content::Text(t) => Some(json!({
                    "role": role_str,
                    "content": t
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}
