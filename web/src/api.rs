//! Fetch wrapper around the TaskMaster REST API.
//!
//! All calls go through `/api/tasks`; the client is served from the same
//! origin as the API, so relative URLs resolve against it.

use serde::{Deserialize, Serialize};

const API_BASE: &str = "/api";

/// A task as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
}

/// Fields sent when creating a task.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial fields sent on PATCH; absent fields are left untouched by the
/// server.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Fetches all tasks.
pub async fn get_tasks() -> Result<Vec<Task>, reqwest::Error> {
    reqwest::get(format!("{API_BASE}/tasks"))
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Creates a new task and returns the server copy.
pub async fn create_task(new_task: &NewTask) -> Result<Task, reqwest::Error> {
    reqwest::Client::new()
        .post(format!("{API_BASE}/tasks"))
        .json(new_task)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Merges the given fields into an existing task and returns the updated
/// server copy.
pub async fn update_task(id: &str, patch: &TaskPatch) -> Result<Task, reqwest::Error> {
    reqwest::Client::new()
        .patch(format!("{API_BASE}/tasks/{id}"))
        .json(patch)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Deletes a task by id.
pub async fn delete_task(id: &str) -> Result<(), reqwest::Error> {
    reqwest::Client::new()
        .delete(format!("{API_BASE}/tasks/{id}"))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
