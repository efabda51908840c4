use crate::task::{Task, TaskPatch, TaskService, TaskServiceError, TaskState};
use crate::web::api::ServerErrorResponse;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// JSON representation of a Task for API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TaskJson {
    /// Unique identifier for the task, assigned at creation
    id: Uuid,
    /// Short text naming the task
    title: String,
    /// Optional free-form description
    description: Option<String>,
    /// Whether the task has been completed
    completed: bool,
    /// Timestamp assigned by the store at creation
    created_at: DateTime<Utc>,
}

impl From<Task> for TaskJson {
    fn from(task: Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_string(),
            description: task.description().map(str::to_string),
            completed: task.completed(),
            created_at: task.created_at(),
        }
    }
}

/// Request body for creating a task.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    /// Title of the new task
    title: String,
    /// Optional description of the new task
    #[serde(default)]
    description: Option<String>,
}

/// Request body for partially updating a task. Absent fields are untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    /// New title, if changing
    #[serde(default)]
    title: Option<String>,
    /// New description, if changing
    #[serde(default)]
    description: Option<String>,
    /// New completion state, if changing
    #[serde(default)]
    completed: Option<bool>,
}

/// Confirmation body returned after a successful deletion.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteTaskResponse {
    /// Human-readable confirmation message
    message: String,
}

fn error_response(err: TaskServiceError) -> (StatusCode, Json<ServerErrorResponse>) {
    match err {
        TaskServiceError::TaskNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ServerErrorResponse::new(format!(
                "Task with ID {} not found",
                id
            ))),
        ),
        TaskServiceError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ServerErrorResponse::new(
                "Failed to process task request".to_string(),
            )),
        ),
    }
}

/// Handler for GET /api/tasks - Returns all tasks in JSON format.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = [TaskJson]),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn get_tasks_handler(
    State(state): State<Arc<TaskState>>,
) -> Result<Json<Vec<TaskJson>>, (StatusCode, Json<ServerErrorResponse>)> {
    let service = TaskService::new(&state.db);

    match service.get_all_tasks().await {
        Ok(tasks) => Ok(Json(tasks.into_iter().map(TaskJson::from).collect())),
        Err(err) => {
            tracing::error!("Failed to get tasks: {}", err);
            Err(error_response(err))
        }
    }
}

/// Handler for POST /api/tasks - Creates a new task.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskJson),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn create_task_handler(
    State(state): State<Arc<TaskState>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskJson>), (StatusCode, Json<ServerErrorResponse>)> {
    let service = TaskService::new(&state.db);

    match service.create_task(request.title, request.description).await {
        Ok(task) => Ok((StatusCode::CREATED, Json(TaskJson::from(task)))),
        Err(err) => {
            tracing::error!("Failed to create task: {}", err);
            Err(error_response(err))
        }
    }
}

/// Handler for PATCH /api/tasks/{id} - Merges partial fields into a task.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}",
    params(
        ("id" = Uuid, Path, description = "ID of the task to update")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskJson),
        (status = 404, description = "Task not found", body = ServerErrorResponse),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn update_task_handler(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<TaskJson>, (StatusCode, Json<ServerErrorResponse>)> {
    let service = TaskService::new(&state.db);

    let patch = TaskPatch {
        title: request.title,
        description: request.description,
        completed: request.completed,
    };

    match service.update_task(id, patch).await {
        Ok(task) => Ok(Json(TaskJson::from(task))),
        Err(err) => {
            tracing::error!("Failed to update task {}: {}", id, err);
            Err(error_response(err))
        }
    }
}

/// Handler for DELETE /api/tasks/{id} - Removes a task by ID.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(
        ("id" = Uuid, Path, description = "ID of the task to delete")
    ),
    responses(
        (status = 200, description = "Task deleted", body = DeleteTaskResponse),
        (status = 404, description = "Task not found", body = ServerErrorResponse),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn delete_task_handler(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteTaskResponse>, (StatusCode, Json<ServerErrorResponse>)> {
    let service = TaskService::new(&state.db);

    match service.delete_task_by_id(id).await {
        Ok(task) => Ok(Json(DeleteTaskResponse {
            message: format!("Task '{}' deleted", task.title()),
        })),
        Err(err) => {
            tracing::error!("Failed to delete task {}: {}", id, err);
            Err(error_response(err))
        }
    }
}

/// Creates and returns the tasks API router.
pub fn create_api_router(state: Arc<TaskState>) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(get_tasks_handler).post(create_task_handler),
        )
        .route(
            "/tasks/{id}",
            axum::routing::patch(update_task_handler).delete(delete_task_handler),
        )
        .with_state(state)
}
