use std::sync::Arc;

use crate::task::{TaskState, api};

use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Error body returned by API endpoints on failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServerErrorResponse {
    /// Human-readable description of the failure
    pub error: String,
}

impl ServerErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        api::get_tasks_handler,
        api::create_task_handler,
        api::update_task_handler,
        api::delete_task_handler,
    ),
    components(schemas(
        api::TaskJson,
        api::CreateTaskRequest,
        api::UpdateTaskRequest,
        api::DeleteTaskResponse,
        ServerErrorResponse,
    )),
    tags(
        (name = "Tasks", description = "Task management endpoints")
    )
)]
struct ApiDoc;

/// Creates the API routes for JSON API endpoints.
pub fn create_api_router(task_state: Arc<TaskState>) -> axum::Router {
    let tasks_router = api::create_api_router(task_state);
    Router::new()
        .nest("/api", tasks_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
