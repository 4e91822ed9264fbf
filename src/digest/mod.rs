//! Digest pipeline: select pending todos, summarize, publish.
//!
//! Only a failure to read the task store reaches the caller. Primary
//! summarizer failures are recovered by the rule-based fallback and publish
//! failures are logged and dropped.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::ai::fallback::summarize_fallback;
use crate::core::models::{Digest, DigestOutcome, Task};
use crate::core::store::TaskStore;
use crate::errors::{PublishError, StoreError, SummarizeError};

/// How long the pipeline waits for an in-flight publish before returning.
pub const DEFAULT_PUBLISH_WAIT: Duration = Duration::from_secs(15);

/// Slack added on top of the publisher's own request timeout, so the
/// pipeline never gives up on a request the publisher still allows.
pub const PUBLISH_WAIT_MARGIN: Duration = Duration::from_secs(2);

/// Wait that covers a publish bounded by `publish_timeout`.
#[must_use]
pub fn publish_wait_for(publish_timeout: Duration) -> Duration {
    publish_timeout + PUBLISH_WAIT_MARGIN
}

/// Primary (remote) summary generator.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, tasks: &[Task]) -> Result<String, SummarizeError>;
}

/// Destination for finished digests.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Whether a destination is set up at all.
    fn is_configured(&self) -> bool;

    async fn publish(&self, summary: &str) -> Result<(), PublishError>;
}

pub struct DigestService {
    store: Arc<dyn TaskStore>,
    summarizer: Arc<dyn Summarizer>,
    publisher: Arc<dyn Publisher>,
    publish_wait: Duration,
}

impl DigestService {
    pub fn new(
        store: Arc<dyn TaskStore>,
        summarizer: Arc<dyn Summarizer>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            store,
            summarizer,
            publisher,
            publish_wait: DEFAULT_PUBLISH_WAIT,
        }
    }

    #[must_use]
    pub fn with_publish_wait(mut self, publish_wait: Duration) -> Self {
        self.publish_wait = publish_wait;
        self
    }

    #[must_use]
    pub fn publish_wait(&self) -> Duration {
        self.publish_wait
    }

    /// Runs the pipeline once against the current pending todos.
    ///
    /// # Errors
    ///
    /// Returns an error only if the pending todos cannot be read.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn generate_and_publish(&self) -> Result<DigestOutcome, StoreError> {
        let pending = self.store.list_pending().await?;

        if pending.is_empty() {
            info!("No pending todos, skipping summary and publish");
            return Ok(DigestOutcome::all_completed());
        }

        info!(pending = pending.len(), "Summarizing pending todos");
        let digest = self.summarize(&pending).await;
        info!(source = %digest.source, "Digest generated");

        self.publish_best_effort(&digest).await;

        Ok(DigestOutcome::generated(digest))
    }

    async fn summarize(&self, pending: &[Task]) -> Digest {
        match self.summarizer.summarize(pending).await {
            Ok(text) => Digest::primary(text),
            Err(SummarizeError::Unconfigured) => {
                info!("OpenAI API key not configured, using fallback summary");
                summarize_fallback(pending)
            }
            Err(SummarizeError::Remote(e)) => {
                error!(error = %e, "AI summary failed, using fallback");
                summarize_fallback(pending)
            }
        }
    }

    /// Fire the publish on its own task, log how it went, and move on.
    async fn publish_best_effort(&self, digest: &Digest) {
        if !self.publisher.is_configured() {
            warn!("Slack webhook URL not configured, skipping Slack notification");
            return;
        }

        let publisher = Arc::clone(&self.publisher);
        let summary = digest.text.clone();
        let handle = tokio::spawn(async move {
            if let Err(e) = publisher.publish(&summary).await {
                error!(error = %e, "Slack notification failed");
            }
        });

        match tokio::time::timeout(self.publish_wait, handle).await {
            Ok(Ok(())) => {}
            Ok(Err(join_err)) => error!(error = %join_err, "Slack notification task aborted"),
            Err(_) => warn!(
                "Slack notification still in flight after {:?}, not waiting",
                self.publish_wait
            ),
        }
    }
}
