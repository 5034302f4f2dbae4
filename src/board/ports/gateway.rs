//! Port for the task operations the board depends on.

use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::task::services::TaskServiceError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for board gateway operations.
pub type BoardGatewayResult<T> = Result<T, BoardGatewayError>;

/// Remote task store as seen by the board.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardGateway: Send + Sync {
    /// Fetches every task of a project in fetch order.
    async fn list_tasks(&self, project_id: ProjectId) -> BoardGatewayResult<Vec<Task>>;

    /// Persists a status change and returns the stored task.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> BoardGatewayResult<Task>;
}

/// Errors returned by board gateways.
#[derive(Debug, Error)]
pub enum BoardGatewayError {
    /// The task service rejected the call.
    #[error(transparent)]
    Task(#[from] TaskServiceError),

    /// The remote store could not be reached.
    #[error("task store unavailable: {0}")]
    Unavailable(String),
}
