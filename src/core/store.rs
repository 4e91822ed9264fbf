//! Task storage.
//!
//! The digest pipeline only ever calls [`TaskStore::list_pending`]; the
//! remaining operations back the todo CRUD endpoints.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::models::{Task, TaskUpdate};
use crate::errors::StoreError;

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a new pending task. `text` is trimmed and must not be blank.
    async fn insert(&self, text: &str) -> Result<Task, StoreError>;

    /// All tasks in insertion order.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    async fn find(&self, id: u64) -> Result<Task, StoreError>;

    async fn update(&self, id: u64, update: TaskUpdate) -> Result<Task, StoreError>;

    async fn delete(&self, id: u64) -> Result<Task, StoreError>;

    /// Tasks with `completed == false`, in insertion order.
    async fn list_pending(&self) -> Result<Vec<Task>, StoreError> {
        let tasks = self.list().await?;
        Ok(tasks.into_iter().filter(|t| !t.completed).collect())
    }
}

#[derive(Debug)]
struct StoreState {
    tasks: Vec<Task>,
    next_id: u64,
}

/// Process-local store. Contents live as long as the Lambda container.
#[derive(Debug)]
pub struct InMemoryTaskStore {
    state: RwLock<StoreState>,
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store holding the three sample todos the service starts with.
    #[must_use]
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = [
            ("Complete project documentation", false),
            ("Review code changes", false),
            ("Prepare for team meeting", true),
        ];
        let tasks: Vec<Task> = seed
            .iter()
            .zip(1..)
            .map(|((text, completed), id)| Task {
                id,
                text: (*text).to_string(),
                completed: *completed,
                created_at: now,
            })
            .collect();
        let next_id = tasks.len() as u64 + 1;

        Self {
            state: RwLock::new(StoreState { tasks, next_id }),
        }
    }
}

fn normalize_text(text: &str) -> Result<String, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyText);
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, text: &str) -> Result<Task, StoreError> {
        let text = normalize_text(text)?;
        let mut state = self.state.write().await;
        let task = Task {
            id: state.next_id,
            text,
            completed: false,
            created_at: Utc::now(),
        };
        state.next_id += 1;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.state.read().await.tasks.clone())
    }

    async fn find(&self, id: u64) -> Result<Task, StoreError> {
        self.state
            .read()
            .await
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: u64, update: TaskUpdate) -> Result<Task, StoreError> {
        let mut state = self.state.write().await;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        // Validate before touching anything so a rejected update is a no-op.
        let text = update.text.as_deref().map(normalize_text).transpose()?;
        if let Some(text) = text {
            task.text = text;
        }
        if let Some(completed) = update.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    async fn delete(&self, id: u64) -> Result<Task, StoreError> {
        let mut state = self.state.write().await;
        let index = state
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(state.tasks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_trims_and_assigns_increasing_ids() {
        let store = InMemoryTaskStore::new();
        let first = store.insert("  Write release notes ").await.unwrap();
        let second = store.insert("Fix flaky test").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.text, "Write release notes");
        assert!(!first.completed);
    }

    #[tokio::test]
    async fn test_insert_rejects_blank_text() {
        let store = InMemoryTaskStore::new();
        assert_eq!(store.insert("   ").await, Err(StoreError::EmptyText));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seeded_store_has_two_pending_tasks() {
        let store = InMemoryTaskStore::seeded();
        let all = store.list().await.unwrap();
        let pending = store.list_pending().await.unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(
            pending.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
            vec!["Complete project documentation", "Review code changes"]
        );

        let next = store.insert("New task").await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_update_applies_partial_changes() {
        let store = InMemoryTaskStore::new();
        let task = store.insert("Draft roadmap").await.unwrap();

        let updated = store
            .update(
                task.id,
                TaskUpdate {
                    text: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.text, "Draft roadmap");

        let renamed = store
            .update(
                task.id,
                TaskUpdate {
                    text: Some(" Draft Q3 roadmap ".to_string()),
                    completed: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.text, "Draft Q3 roadmap");
        assert!(renamed.completed);
        assert_eq!(renamed.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_task_unchanged() {
        let store = InMemoryTaskStore::new();
        let task = store.insert("Draft roadmap").await.unwrap();

        let result = store
            .update(
                task.id,
                TaskUpdate {
                    text: Some("  ".to_string()),
                    completed: Some(true),
                },
            )
            .await;

        assert_eq!(result, Err(StoreError::EmptyText));
        assert_eq!(store.find(task.id).await.unwrap(), task);
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let store = InMemoryTaskStore::new();
        assert_eq!(store.find(9).await, Err(StoreError::NotFound(9)));
        assert_eq!(
            store.update(9, TaskUpdate::default()).await,
            Err(StoreError::NotFound(9))
        );
        assert_eq!(store.delete(9).await, Err(StoreError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_delete_removes_task_and_keeps_ids_unique() {
        let store = InMemoryTaskStore::new();
        let a = store.insert("a").await.unwrap();
        store.insert("b").await.unwrap();

        let deleted = store.delete(a.id).await.unwrap();
        assert_eq!(deleted.text, "a");

        let c = store.insert("c").await.unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
