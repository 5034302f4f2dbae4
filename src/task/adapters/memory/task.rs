//! In-memory repository for project tasks.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept in insertion order, which is also the fetch order
/// returned by [`TaskRepository::list_by_project`]: oldest first. Hosted
/// stores that sort by `created_at` descending hand back newest first
/// instead. The board keeps whatever order the repository returns within
/// each column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn position(tasks: &[Task], id: TaskId) -> TaskRepositoryResult<usize> {
    tasks
        .iter()
        .position(|task| task.id() == id)
        .ok_or(TaskRepositoryError::NotFound(id))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        if tasks.iter().any(|stored| stored.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let index = position(&tasks, task.id())?;
        if let Some(slot) = tasks.get_mut(index) {
            *slot = task.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks
            .iter()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let index = position(&tasks, id)?;
        tasks.remove(index);
        Ok(())
    }
}
