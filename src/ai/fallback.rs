//! Rule-based digest used whenever the LLM summary is unavailable.
//!
//! Tasks are bucketed by keyword: each task goes to the first category, in
//! declaration order, with a keyword that occurs in its lower-cased text.
//! Categories are then printed in the order they were first populated.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use crate::core::models::{Digest, Task};
use crate::utils::time::format_locale_timestamp;

pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const CATEGORIES: [Category; 5] = [
    Category {
        name: "Documentation",
        keywords: &["document", "doc", "write", "report"],
    },
    Category {
        name: "Code Review",
        keywords: &["review", "code", "pull request", "merge"],
    },
    Category {
        name: "Meetings",
        keywords: &["meeting", "call", "discuss", "presentation"],
    },
    Category {
        name: "Development",
        keywords: &["develop", "build", "implement", "create", "fix"],
    },
    Category {
        name: "Testing",
        keywords: &["test", "qa", "bug", "debug"],
    },
];

/// Category label for a single task text.
#[must_use]
pub fn categorize(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    CATEGORIES
        .iter()
        .find(|c| c.keywords.iter().any(|kw| lowered.contains(*kw)))
        .map_or(OTHER_CATEGORY, |c| c.name)
}

/// Populated categories in first-seen order, each with its task texts in input order.
#[must_use]
pub fn bucket_tasks(tasks: &[Task]) -> Vec<(&'static str, Vec<&str>)> {
    let mut buckets: Vec<(&'static str, Vec<&str>)> = Vec::new();
    for task in tasks {
        let category = categorize(&task.text);
        match buckets.iter_mut().find(|(name, _)| *name == category) {
            Some((_, texts)) => texts.push(task.text.as_str()),
            None => buckets.push((category, vec![task.text.as_str()])),
        }
    }
    buckets
}

#[must_use]
pub fn summarize_fallback(tasks: &[Task]) -> Digest {
    summarize_fallback_at(tasks, &Local::now())
}

/// Same as [`summarize_fallback`] with the footer timestamp supplied by the caller.
#[must_use]
pub fn summarize_fallback_at<Tz>(tasks: &[Task], generated_at: &DateTime<Tz>) -> Digest
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut summary = format!("📋 **Pending Tasks Summary** ({} items)\n\n", tasks.len());

    for (category, texts) in bucket_tasks(tasks) {
        let plural = if texts.len() > 1 { "s" } else { "" };
        summary.push_str(&format!("**{category}** ({} task{plural}):\n", texts.len()));
        for text in texts {
            summary.push_str(&format!("• {text}\n"));
        }
        summary.push('\n');
    }

    summary.push_str(&format!(
        "_Generated automatically on {}_",
        format_locale_timestamp(generated_at)
    ));

    Digest::fallback(summary)
}
