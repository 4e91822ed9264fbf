use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_PENDING_MESSAGE: &str = "No pending todos to summarize";
pub const ALL_COMPLETED_SUMMARY: &str = "All tasks are completed! 🎉";
pub const SUMMARY_GENERATED_MESSAGE: &str = "Summary generated successfully";

/// A single todo item as held by the task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied by `PUT /todos/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskUpdate {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Which generator produced a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestSource {
    Primary,
    Fallback,
}

impl fmt::Display for DigestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digest {
    pub text: String,
    pub source: DigestSource,
}

impl Digest {
    pub fn primary(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: DigestSource::Primary,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: DigestSource::Fallback,
        }
    }
}

/// Result of one run of the digest pipeline.
///
/// `digest` is `None` only when nothing was pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestOutcome {
    pub message: String,
    pub digest: Option<Digest>,
}

impl DigestOutcome {
    #[must_use]
    pub fn all_completed() -> Self {
        Self {
            message: NO_PENDING_MESSAGE.to_string(),
            digest: None,
        }
    }

    #[must_use]
    pub fn generated(digest: Digest) -> Self {
        Self {
            message: SUMMARY_GENERATED_MESSAGE.to_string(),
            digest: Some(digest),
        }
    }

    /// Text returned to callers as `summary`.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.digest
            .as_ref()
            .map_or(ALL_COMPLETED_SUMMARY, |d| d.text.as_str())
    }
}
