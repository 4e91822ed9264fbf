use thiserror::Error;

/// Failures reported by the remote generation capability once a request
/// has actually been attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteGenerationError {
    #[error(
        "OpenAI quota exceeded. Please check your billing settings at https://platform.openai.com/account/billing"
    )]
    QuotaExceeded,

    #[error("Invalid OpenAI API key")]
    InvalidCredential,

    #[error("OpenAI rate limit exceeded. Please try again later")]
    RateLimited,

    #[error("Failed to generate AI summary: {0}")]
    Other(String),
}

impl From<reqwest::Error> for RemoteGenerationError {
    fn from(error: reqwest::Error) -> Self {
        RemoteGenerationError::Other(format!("OpenAI API request failed: {error}"))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("OpenAI API key not configured")]
    Unconfigured,

    #[error(transparent)]
    Remote(#[from] RemoteGenerationError),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to send summary to Slack: {0}")]
    Http(String),

    #[error("Slack webhook rejected summary (status {status}): {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for PublishError {
    fn from(error: reqwest::Error) -> Self {
        PublishError::Http(error.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Todo not found: {0}")]
    NotFound(u64),

    #[error("Todo text is required")]
    EmptyText,

    #[error("Task store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}: invalid value `{value}`")]
    InvalidValue { name: &'static str, value: String },

    #[error("{name}: invalid URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
}
