//! Block Kit envelope posted to the Slack incoming webhook.

use serde_json::{Value, json};

pub const REPORT_TITLE: &str = "📋 Todo Summary Report";

/// Create the webhook payload for a finished digest
///
/// The message is a header block with [`REPORT_TITLE`], a `mrkdwn` section
/// carrying the digest, and a context footer with the generation time.
/// `text` repeats the title for clients that do not render blocks.
///
/// # Examples
///
/// ```
/// use todo_digest::slack::message_builder::build_summary_message;
///
/// let payload = build_summary_message("*2 pending*", "10/17/2026, 9:00:00 AM");
/// assert_eq!(payload["blocks"][1]["text"]["text"], "*2 pending*");
/// ```
#[must_use]
pub fn build_summary_message(summary: &str, generated_at: &str) -> Value {
    json!({
        "text": REPORT_TITLE,
        "blocks": [
            {
                "type": "header",
                "text": { "type": "plain_text", "text": REPORT_TITLE }
            },
            {
                "type": "section",
                "text": { "type": "mrkdwn", "text": summary }
            },
            {
                "type": "context",
                "elements": [
                    { "type": "mrkdwn", "text": format!("Generated on {generated_at}") }
                ]
            }
        ]
    })
}
