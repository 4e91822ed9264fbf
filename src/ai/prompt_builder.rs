use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::Task;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes to-do lists in a professional and concise manner.";

/// Max characters of a single task kept in the prompt.
pub const MAX_TASK_TEXT_LEN: usize = 500;

/// Replace control characters (newlines included) with spaces and
/// hard-truncate, so each task stays on its own bullet line.
#[must_use]
pub fn sanitize_task_text(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .take(MAX_TASK_TEXT_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}

/// One `- <text>` line per task, in the given order.
#[must_use]
pub fn format_task_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|t| format!("- {}", sanitize_task_text(&t.text)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn build_user_prompt(tasks: &[Task]) -> String {
    format!(
        "Please provide a concise and professional summary of the following pending to-do items. \n\
         Focus on identifying themes, priority areas, and providing an overview that would be useful for a team update:\n\n\
         {}\n\n\
         Please format the response in a way that's suitable for sharing in a Slack channel.",
        format_task_list(tasks)
    )
}

#[must_use]
pub fn build_prompt(tasks: &[Task]) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(build_user_prompt(tasks)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
