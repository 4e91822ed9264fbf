/// Todo Digest - a small task tracker that condenses pending todos into a
/// digest and posts it to a Slack channel.
///
/// The crate is deployed as a single API Lambda behind API Gateway:
/// 1. Todo CRUD endpoints backed by an in-memory task store
/// 2. A `/summarize` action that runs the digest pipeline
///
/// # Architecture
///
/// The digest pipeline tries the `OpenAI` chat-completions API first and
/// falls back to a deterministic keyword categorizer whenever the primary
/// generator is unconfigured or fails. The finished digest is posted to a
/// Slack incoming webhook on a best-effort basis.
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for the `OpenAI` and Slack webhook calls
/// - tracing for structured JSON logs
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use todo_digest::ai::LlmClient;
/// use todo_digest::core::config::AppConfig;
/// use todo_digest::core::store::InMemoryTaskStore;
/// use todo_digest::digest::DigestService;
/// use todo_digest::slack::SlackWebhook;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     todo_digest::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let service = DigestService::new(
///         Arc::new(InMemoryTaskStore::seeded()),
///         Arc::new(LlmClient::from_config(&config)),
///         Arc::new(SlackWebhook::from_config(&config)),
///     );
///
///     let outcome = service.generate_and_publish().await?;
///     println!("{}: {}", outcome.message, outcome.summary());
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod core;
pub mod digest;
pub mod errors;
pub mod slack;
pub mod utils;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log levels follow `RUST_LOG` and default to `info`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// todo_digest::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
