use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
    TransactionTrait,
};

use crate::{
    entity,
    error::TaskResult,
    models::{NewTask, Task, TaskChanges},
    repository::TaskRepository,
};

/// Sea-ORM implementation of TaskRepository.
///
/// Written against Postgres; any sea-orm backend with the `tasks` migration
/// applied works. Each mutation runs in its own transaction.
#[derive(Debug, Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let txn = self.db.begin().await?;
        let model = entity::ActiveModel::from(input).insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> TaskResult<Option<Task>> {
        let txn = self.db.begin().await?;

        let Some(model) = entity::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if changes.is_empty() {
            txn.commit().await?;
            return Ok(Some(model.into()));
        }

        let mut active: entity::ActiveModel = model.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(status) = changes.status {
            active.status = Set(status);
        }
        if let Some(due_date) = changes.due_date {
            active.due_date = Set(due_date);
        }

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(task_id = id, "Updated task");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i64) -> TaskResult<Option<Task>> {
        let txn = self.db.begin().await?;

        let Some(model) = entity::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        entity::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(task_id = id, "Deleted task");
        Ok(Some(model.into()))
    }

    async fn count(&self) -> TaskResult<usize> {
        let count = entity::Entity::find().count(&self.db).await?;
        Ok(count as usize)
    }
}
