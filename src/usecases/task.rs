use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Task, TaskInput};
use crate::repository::TaskRepository;

/// Task operations available to route handlers.
#[async_trait]
pub trait TaskUsecase: Send + Sync {
    async fn get_tasks(&self) -> AppResult<Vec<Task>>;
    async fn get_task_by_id(&self, id: Uuid) -> AppResult<Task>;
    async fn create_task(&self, task: Task) -> AppResult<Task>;
    async fn update_task(&self, id: Uuid, input: TaskInput) -> AppResult<Task>;
    async fn delete_task(&self, id: Uuid) -> AppResult<()>;
}

/// `TaskUsecase` that hands every call straight to a `TaskRepository`.
pub struct TaskManager {
    tasks: Arc<dyn TaskRepository>,
}

impl TaskManager {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }
}

#[async_trait]
impl TaskUsecase for TaskManager {
    async fn get_tasks(&self) -> AppResult<Vec<Task>> {
        self.tasks.get_tasks().await
    }

    async fn get_task_by_id(&self, id: Uuid) -> AppResult<Task> {
        self.tasks.get_task_by_id(id).await
    }

    async fn create_task(&self, task: Task) -> AppResult<Task> {
        self.tasks.create_task(task).await
    }

    async fn update_task(&self, id: Uuid, input: TaskInput) -> AppResult<Task> {
        self.tasks.update_task(id, input).await
    }

    async fn delete_task(&self, id: Uuid) -> AppResult<()> {
        self.tasks.delete_task(id).await
    }
}
