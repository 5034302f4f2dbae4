//! Service layer for task creation, editing, and retrieval.

use crate::project::domain::ProjectId;
use crate::suggestion::domain::TaskSuggestion;
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPriority, TaskStatus, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task on a project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            priority: None,
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    async fn find_task_or_error(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Creates a task.
    ///
    /// Missing fields default to an empty description, `Medium` priority,
    /// and the `todo` column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the title is blank or the
    /// repository rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let mut draft = TaskDraft::new(request.title)?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(priority) = request.priority {
            draft = draft.with_priority(priority);
        }
        if let Some(status) = request.status {
            draft = draft.with_status(status);
        }

        let task = Task::new(request.project_id, draft, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Lists the tasks of a project in fetch order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, project_id: ProjectId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list_by_project(project_id).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Applies an inline edit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for unknown tasks, domain
    /// errors for a blank title, or repository errors.
    pub async fn update(&self, id: TaskId, update: &TaskUpdate) -> TaskServiceResult<Task> {
        let mut task = self.find_task_or_error(id).await?;
        task.apply(update, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Moves a task to another board column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for unknown tasks or
    /// repository errors.
    pub async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskServiceResult<Task> {
        let mut task = self.find_task_or_error(id).await?;
        if task.set_status(status, &*self.clock) {
            self.repository.update(&task).await?;
        }
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task does not exist
    /// or deletion fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Turns accepted AI suggestions into `todo` tasks, preserving order.
    ///
    /// Stops at the first failure; tasks created before it stay persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] from the first failing creation.
    pub async fn import_suggestions(
        &self,
        project_id: ProjectId,
        suggestions: &[TaskSuggestion],
    ) -> TaskServiceResult<Vec<Task>> {
        let mut created = Vec::with_capacity(suggestions.len());
        for suggestion in suggestions {
            let request = CreateTaskRequest::new(project_id, suggestion.title.clone())
                .with_description(suggestion.description.clone())
                .with_priority(suggestion.priority)
                .with_status(TaskStatus::Todo);
            created.push(self.create(request).await?);
        }
        Ok(created)
    }
}
