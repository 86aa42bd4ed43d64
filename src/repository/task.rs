use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Task, TaskInput};

#[cfg(test)]
use mockall::automock;

/// Storage of `Task` records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks, oldest first.
    async fn get_tasks(&self) -> AppResult<Vec<Task>>;

    /// A single task, or `AppError::NotFound`.
    async fn get_task_by_id(&self, id: Uuid) -> AppResult<Task>;

    /// Inserts `task` and returns the stored row.
    async fn create_task(&self, task: Task) -> AppResult<Task>;

    /// Replaces title and description of task `id`, or `AppError::NotFound`.
    async fn update_task(&self, id: Uuid, input: TaskInput) -> AppResult<Task>;

    /// Removes task `id`, or `AppError::NotFound`.
    async fn delete_task(&self, id: Uuid) -> AppResult<()>;
}

pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn task_not_found() -> AppError {
    AppError::NotFound("Task not found".into())
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn get_tasks(&self) -> AppResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description FROM tasks ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn get_task_by_id(&self, id: Uuid) -> AppResult<Task> {
        sqlx::query_as::<_, Task>("SELECT id, title, description FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(task_not_found)
    }

    async fn create_task(&self, task: Task) -> AppResult<Task> {
        let created = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, title, description)
             VALUES ($1, $2, $3)
             RETURNING id, title, description",
        )
        .bind(task.id)
        .bind(task.title)
        .bind(task.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_task(&self, id: Uuid, input: TaskInput) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET title = $1, description = $2, updated_at = now()
             WHERE id = $3
             RETURNING id, title, description",
        )
        .bind(input.title)
        .bind(input.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(task_not_found)
    }

    async fn delete_task(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(task_not_found());
        }

        Ok(())
    }
}
