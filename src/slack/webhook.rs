//! Slack incoming-webhook publisher
//!
//! One POST per digest, no retry. An unset webhook URL turns publishing
//! into a logged no-op.

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

use super::message_builder::build_summary_message;
use crate::core::config::AppConfig;
use crate::digest::Publisher;
use crate::errors::PublishError;
use crate::utils::time::format_locale_timestamp;

pub struct SlackWebhook {
    webhook_url: Option<Url>,
    timeout: Duration,
}

impl SlackWebhook {
    #[must_use]
    pub fn new(webhook_url: Option<Url>, timeout: Duration) -> Self {
        Self {
            webhook_url,
            timeout,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.slack_webhook_url.clone(), config.publish_timeout)
    }

    /// # Errors
    ///
    /// Returns an error if the POST fails to send or Slack answers with a
    /// non-success status.
    pub async fn send_summary(&self, summary: &str) -> Result<(), PublishError> {
        let Some(url) = &self.webhook_url else {
            warn!("Slack webhook URL not configured, skipping Slack notification");
            return Ok(());
        };

        let payload = build_summary_message(summary, &format_locale_timestamp(&Local::now()));

        let client = Client::builder().timeout(self.timeout).build()?;
        let resp = client.post(url.clone()).json(&payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("Failed to send to Slack: status={} body={}", status, body);
            return Err(PublishError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!("Successfully sent summary to Slack");
        Ok(())
    }
}

#[async_trait]
impl Publisher for SlackWebhook {
    fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    async fn publish(&self, summary: &str) -> Result<(), PublishError> {
        self.send_summary(summary).await
    }
}
