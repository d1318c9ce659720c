use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::{NewTask, Task, TaskChanges};

/// Repository trait for Task persistence
///
/// Inputs arrive already trimmed and validated by the service. Every method
/// is atomic with respect to the whole collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a new task, assigning `id` and `created_at`
    async fn create(&self, input: NewTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// All tasks, ascending by id
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Apply changes; `None` if the task does not exist
    async fn update(&self, id: i64, changes: TaskChanges) -> TaskResult<Option<Task>>;

    /// Remove a task and return it; `None` if it does not exist
    async fn delete(&self, id: i64) -> TaskResult<Option<Task>>;

    /// Count all tasks
    async fn count(&self) -> TaskResult<usize>;
}

#[derive(Debug, Default)]
struct MemoryState {
    tasks: BTreeMap<i64, Task>,
    last_id: i64,
}

/// In-memory implementation of TaskRepository
///
/// Ids come from a counter that only moves forward, so a deleted id is
/// never handed out again.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let mut state = self.state.write().await;

        state.last_id += 1;
        let task = Task {
            id: state.last_id,
            title: input.title,
            description: input.description,
            status: input.status,
            due_date: input.due_date,
            created_at: chrono::Utc::now(),
        };
        state.tasks.insert(task.id, task.clone());

        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> TaskResult<Option<Task>> {
        let mut state = self.state.write().await;

        let Some(task) = state.tasks.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(task);

        tracing::info!(task_id = id, "Updated task");
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: i64) -> TaskResult<Option<Task>> {
        let mut state = self.state.write().await;

        let removed = state.tasks.remove(&id);
        if removed.is_some() {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(removed)
    }

    async fn count(&self) -> TaskResult<usize> {
        Ok(self.state.read().await.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateTask, TaskStatus};

    fn new_task(title: &str) -> NewTask {
        CreateTask::new(title).normalize()
    }

    #[tokio::test]
    async fn test_create_and_get_task() {
        let repo = InMemoryTaskRepository::new();

        let task = repo.create(new_task("write tests")).await.unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.status, TaskStatus::Todo);

        let fetched = repo.get_by_id(task.id).await.unwrap();
        assert_eq!(fetched, Some(task));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryTaskRepository::new();

        repo.create(new_task("a")).await.unwrap();
        let b = repo.create(new_task("b")).await.unwrap();
        repo.delete(b.id).await.unwrap();

        let c = repo.create(new_task("c")).await.unwrap();
        assert!(c.id > b.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryTaskRepository::new();
        let changes = TaskChanges {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        assert_eq!(repo.update(99, changes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_task() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(new_task("gone soon")).await.unwrap();

        assert_eq!(repo.delete(task.id).await.unwrap(), Some(task.clone()));
        assert_eq!(repo.delete(task.id).await.unwrap(), None);
        assert_eq!(repo.get_by_id(task.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = InMemoryTaskRepository::new();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(new_task(&format!("task {i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);

        let listed: Vec<i64> = repo.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(listed, (1..=20).collect::<Vec<_>>());
    }
}
