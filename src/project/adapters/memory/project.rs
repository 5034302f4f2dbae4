//! In-memory repository for projects and memberships.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::identity::domain::UserId;
use crate::project::{
    domain::{Project, ProjectId, ProjectMembership, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
///
/// Projects are kept in insertion order, which doubles as creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: Vec<Project>,
    memberships: Vec<ProjectMembership>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memberships recorded for a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn members_of(&self, id: ProjectId) -> ProjectRepositoryResult<Vec<ProjectMembership>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .memberships
            .iter()
            .filter(|membership| membership.project_id == id)
            .cloned()
            .collect())
    }
}

fn poisoned(err: impl ToString) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.projects.iter().any(|stored| stored.id() == project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        state.projects.push(project.clone());
        Ok(())
    }

    async fn list_by_owner(&self, owner: &UserId) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .projects
            .iter()
            .filter(|project| project.owner() == owner)
            .cloned()
            .collect())
    }

    async fn update_name(
        &self,
        id: ProjectId,
        name: &ProjectName,
    ) -> ProjectRepositoryResult<Project> {
        let mut state = self.state.write().map_err(poisoned)?;
        let project = state
            .projects
            .iter_mut()
            .find(|project| project.id() == id)
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        project.rename(name.clone());
        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let before = state.projects.len();
        state.projects.retain(|project| project.id() != id);
        if state.projects.len() == before {
            return Err(ProjectRepositoryError::NotFound(id));
        }
        state
            .memberships
            .retain(|membership| membership.project_id != id);
        Ok(())
    }

    async fn add_member(&self, membership: &ProjectMembership) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state
            .projects
            .iter()
            .any(|project| project.id() == membership.project_id)
        {
            return Err(ProjectRepositoryError::NotFound(membership.project_id));
        }
        let already_member = state.memberships.iter().any(|existing| {
            existing.project_id == membership.project_id && existing.user_id == membership.user_id
        });
        if !already_member {
            state.memberships.push(membership.clone());
        }
        Ok(())
    }
}
