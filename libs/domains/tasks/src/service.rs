use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskChanges, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// Trims and validates input before anything reaches the repository, and
/// turns a missing record into [`TaskError::NotFound`].
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All tasks in creation order
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        let new_task = input.normalize();
        new_task.validate()?;

        self.repository.create(new_task).await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn get_task(&self, id: i64) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Overwrite every editable field; omitted optional fields are cleared
    #[instrument(skip(self, input), fields(task_id = id))]
    pub async fn replace_task(&self, id: i64, input: CreateTask) -> TaskResult<Task> {
        let new_task = input.normalize();
        new_task.validate()?;

        self.apply(id, TaskChanges::from(new_task)).await
    }

    /// Change only the fields present in `input`
    #[instrument(skip(self, input), fields(task_id = id))]
    pub async fn update_task(&self, id: i64, input: UpdateTask) -> TaskResult<Task> {
        let changes = input.normalize();
        changes.validate()?;

        self.apply(id, changes).await
    }

    /// Delete a task, returning the removed record
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn delete_task(&self, id: i64) -> TaskResult<Task> {
        self.repository
            .delete(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Count all tasks
    pub async fn count_tasks(&self) -> TaskResult<usize> {
        self.repository.count().await
    }

    async fn apply(&self, id: i64, changes: TaskChanges) -> TaskResult<Task> {
        self.repository
            .update(id, changes)
            .await?
            .ok_or(TaskError::NotFound(id))
    }
}
