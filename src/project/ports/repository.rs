//! Repository port for project persistence and membership.

use crate::identity::domain::UserId;
use crate::project::domain::{Project, ProjectId, ProjectMembership, ProjectName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the ID
    /// already exists.
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Returns the projects owned by `owner`, oldest first.
    async fn list_by_owner(&self, owner: &UserId) -> ProjectRepositoryResult<Vec<Project>>;

    /// Renames a project and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    async fn update_name(
        &self,
        id: ProjectId,
        name: &ProjectName,
    ) -> ProjectRepositoryResult<Project>;

    /// Deletes a project record. Tasks referencing it are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()>;

    /// Records a membership association.
    async fn add_member(&self, membership: &ProjectMembership) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
