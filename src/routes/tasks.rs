use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Task, TaskInput},
    usecases::TaskUsecase,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

/// Retrieves every task.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[get("")]
pub async fn get_tasks(
    tasks: web::Data<dyn TaskUsecase>,
    _caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = tasks.get_tasks().await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task.
///
/// ## Request Body:
/// A JSON object matching `TaskInput`:
/// - `title`: The title of the task (required, 1-200 characters).
/// - `description` (optional): A description of the task, at most 1000 characters.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `400 Bad Request`: If the body is not valid JSON for `TaskInput`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `422 Unprocessable Entity`: If input validation on `TaskInput` fails.
#[post("")]
pub async fn create_task(
    tasks: web::Data<dyn TaskUsecase>,
    task_data: web::Json<TaskInput>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = tasks.create_task(Task::new(task_data.into_inner())).await?;
    log::debug!("user '{}' created task {}", caller.username(), task.id);

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task has the given ID.
#[get("/{id}")]
pub async fn get_task(
    tasks: web::Data<dyn TaskUsecase>,
    task_id: web::Path<Uuid>,
    _caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = tasks.get_task_by_id(task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Updates an existing task's title and description.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task has the given ID.
/// - `422 Unprocessable Entity`: If input validation on `TaskInput` fails.
#[put("/{id}")]
pub async fn update_task(
    tasks: web::Data<dyn TaskUsecase>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
    _caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = tasks
        .update_task(task_id.into_inner(), task_data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task by its ID.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Task deleted successfully"}`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task has the given ID.
#[delete("/{id}")]
pub async fn delete_task(
    tasks: web::Data<dyn TaskUsecase>,
    task_id: web::Path<Uuid>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let id = task_id.into_inner();
    tasks.delete_task(id).await?;
    log::debug!("user '{}' deleted task {}", caller.username(), id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}
