//! Repository port for task persistence.

use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Remote task store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier is
    /// taken.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Overwrites the stored copy of `task`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown tasks.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Looks a task up, returning `None` when absent.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Lists a project's tasks in fetch order.
    ///
    /// The order is adapter-defined and is kept as-is within each board
    /// column.
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown tasks.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Failures reported by task stores.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The identifier is already stored.
    #[error("task {0} already exists")]
    DuplicateTask(TaskId),

    /// No task has the identifier.
    #[error("task {0} does not exist")]
    NotFound(TaskId),

    /// The backing store failed.
    #[error("task store failure: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a backing-store error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
