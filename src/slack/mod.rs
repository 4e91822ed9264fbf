//! All Slack-specific functionality

pub mod message_builder;
pub mod webhook;

// Re-export main types for convenience
pub use webhook::SlackWebhook;
