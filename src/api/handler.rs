//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Health checks
//! - Todo CRUD (delegated to the `todos` module)
//! - The summarize action (delegated to the digest pipeline)

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::parsing::{self, Route};
use super::{helpers, todos};
use crate::ai::LlmClient;
use crate::core::config::AppConfig;
use crate::core::store::{InMemoryTaskStore, TaskStore};
use crate::digest::{DigestService, publish_wait_for};
use crate::slack::SlackWebhook;

/// Everything a request needs, shared across invocations of a warm container.
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn TaskStore>,
    pub digest: DigestService,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, store: Arc<dyn TaskStore>, digest: DigestService) -> Self {
        Self {
            config,
            store,
            digest,
        }
    }

    /// Wires the seeded in-memory store to the `OpenAI` client and Slack webhook.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let store: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::seeded());
        let digest = DigestService::new(
            Arc::clone(&store),
            Arc::new(LlmClient::from_config(&config)),
            Arc::new(SlackWebhook::from_config(&config)),
        )
        .with_publish_wait(publish_wait_for(config.publish_timeout));
        Self::new(config, store, digest)
    }
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails in practice; every outcome, including internal errors, is
/// returned as a proxy response payload.
pub async fn function_handler(state: &AppState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    let span = info_span!(
        "request",
        correlation_id = %correlation_id,
        aws_request_id = %event.context.request_id
    );
    Ok(handle_request(state, &event.payload).instrument(span).await)
}

/// Routes one API Gateway proxy event and builds the proxy response.
pub async fn handle_request(state: &AppState, payload: &Value) -> Value {
    let method = parsing::request_method(payload);
    let path = parsing::request_path(payload).unwrap_or("/");
    info!(method = %method, path = %path, "API request");

    if method == "OPTIONS" {
        return helpers::preflight();
    }

    let Some(route) = parsing::match_route(path) else {
        return helpers::err_response(404, "Not found");
    };

    match (method.as_str(), route) {
        ("GET", Route::Health) => health(&state.config),
        ("GET", Route::Todos) => todos::list(state.store.as_ref()).await,
        ("POST", Route::Todos) => todos::create(state.store.as_ref(), payload).await,
        ("PUT", Route::Todo(id)) => todos::update(state.store.as_ref(), &id, payload).await,
        ("DELETE", Route::Todo(id)) => todos::delete(state.store.as_ref(), &id).await,
        ("POST", Route::Summarize) => summarize(&state.digest).await,
        _ => helpers::err_response(404, "Not found"),
    }
}

fn health(config: &AppConfig) -> Value {
    helpers::json_response(
        200,
        &json!({
            "status": "OK",
            "timestamp": Utc::now().to_rfc3339(),
            "environment": config.environment
        }),
    )
}

async fn summarize(digest: &DigestService) -> Value {
    match digest.generate_and_publish().await {
        Ok(outcome) => helpers::json_response(
            200,
            &json!({
                "success": true,
                "message": outcome.message,
                "summary": outcome.summary()
            }),
        ),
        Err(e) => {
            error!("Error in summarize endpoint: {}", e);
            helpers::err_response(500, "Failed to generate summary")
        }
    }
}

pub use self::function_handler as handler;
