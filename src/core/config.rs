use std::env;
use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::errors::ConfigError;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_ENVIRONMENT: &str = "development";

const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PUBLISH_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration. Every integration is optional: a missing `OpenAI`
/// key routes summaries to the fallback generator and a missing webhook
/// disables publishing.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: String,
    pub openai_timeout: Duration,
    pub slack_webhook_url: Option<Url>,
    pub publish_timeout: Duration,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_org_id: None,
            openai_model: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_timeout: Duration::from_secs(DEFAULT_OPENAI_TIMEOUT_SECS),
            slack_webhook_url: None,
            publish_timeout: Duration::from_secs(DEFAULT_PUBLISH_TIMEOUT_SECS),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if a numeric timeout or the webhook URL cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric timeout or the webhook URL cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let slack_webhook_url = non_blank("SLACK_WEBHOOK_URL")
            .map(|raw| {
                Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
                    name: "SLACK_WEBHOOK_URL",
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let openai_timeout = parse_secs(
            "OPENAI_TIMEOUT_SECS",
            non_blank("OPENAI_TIMEOUT_SECS"),
            DEFAULT_OPENAI_TIMEOUT_SECS,
        )?;
        let publish_timeout = parse_secs(
            "PUBLISH_TIMEOUT_SECS",
            non_blank("PUBLISH_TIMEOUT_SECS"),
            DEFAULT_PUBLISH_TIMEOUT_SECS,
        )?;

        Ok(Self {
            openai_api_key: non_blank("OPENAI_API_KEY"),
            openai_org_id: non_blank("OPENAI_ORG_ID"),
            openai_model: non_blank("OPENAI_MODEL"),
            openai_base_url: non_blank("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_timeout,
            slack_webhook_url,
            publish_timeout,
            environment: non_blank("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    /// Logs one warning per optional integration that is switched off.
    pub fn warn_missing_integrations(&self) {
        if self.openai_api_key.is_none() {
            warn!("OpenAI API key not configured - AI summaries will use fallback mode");
        }
        if self.slack_webhook_url.is_none() {
            warn!("Slack webhook URL not configured - Slack notifications disabled");
        }
    }
}

fn parse_secs(
    name: &'static str,
    raw: Option<String>,
    default: u64,
) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(Duration::from_secs(default)),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::InvalidValue { name, value }),
        },
    }
}
