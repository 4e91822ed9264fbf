//! All AI/LLM functionality, plus the rule-based fallback used when the LLM is unavailable

pub mod client;
pub mod fallback;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::LlmClient;
pub use fallback::{summarize_fallback, summarize_fallback_at};
