use crate::entities::*;
use chrono::{DateTime, Utc};
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

pub mod api;

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Task {
    id: Uuid,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        id: Uuid,
        title: String,
        description: Option<String>,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed,
            created_at,
        }
    }

    /// Returns the ID of the task.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the title of the task.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description of the task, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task is completed.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp of the task.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl From<task::Model> for Task {
    fn from(model: task::Model) -> Self {
        Task::new(
            model.id,
            model.title,
            model.description,
            model.completed,
            model.created_at,
        )
    }
}

/// Error type for TaskService operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    /// Represents a task not found error.
    #[error("Task with ID {0} not found")]
    TaskNotFound(Uuid),
}

/// Partial field set applied by [`TaskService::update_task`]. Absent fields
/// are left untouched.
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Shared state handed to task routers.
#[derive(Clone, Debug)]
pub struct TaskState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

pub struct TaskService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl TaskService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> TaskService {
        TaskService { db }
    }

    /// Creates a new task in the database.
    ///
    /// # Arguments
    ///
    /// * `title` - The title of the task.
    /// * `description` - An optional free-form description.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn create_task(
        &self,
        title: String,
        description: Option<String>,
    ) -> Result<Task, TaskServiceError> {
        let active_model = task::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            completed: ActiveValue::Set(false),
            // created_at is assigned by the database column default.
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        Ok(Task::from(created_model))
    }

    /// Retrieves all tasks from the database.
    ///
    /// # Returns
    ///
    /// A `Result` containing a vector of `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, TaskServiceError> {
        let tasks = task::Entity::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(Task::from)
            .collect();
        Ok(tasks)
    }

    /// Retrieves a task by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the task to retrieve.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_task_by_id(&self, id: Uuid) -> Result<Task, TaskServiceError> {
        let task_model = task::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;
        Ok(Task::from(task_model))
    }

    /// Merges the fields of a patch into an existing task.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the task to update.
    /// * `patch` - The fields to merge; absent fields keep their current value.
    ///
    /// # Returns
    ///
    /// A `Result` containing the updated `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn update_task(&self, id: Uuid, patch: TaskPatch) -> Result<Task, TaskServiceError> {
        let task_to_update = task::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;

        let mut active_model: task::ActiveModel = task_to_update.into();
        if let Some(title) = patch.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = patch.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(completed) = patch.completed {
            active_model.completed = ActiveValue::Set(completed);
        }
        let updated_model = active_model.update(self.db).await?;

        Ok(Task::from(updated_model))
    }

    /// Deletes a task by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the task to delete.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deleted `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn delete_task_by_id(&self, id: Uuid) -> Result<Task, TaskServiceError> {
        let task_to_delete = task::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;

        let task_copy = Task::from(task_to_delete.clone());
        task::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(task_copy)
    }
}
