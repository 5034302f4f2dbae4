//! Board gateway backed by the task service.

use async_trait::async_trait;
use mockable::Clock;

use crate::board::ports::{BoardGateway, BoardGatewayResult};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::TaskService,
};

#[async_trait]
impl<R, C> BoardGateway for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    async fn list_tasks(&self, project_id: ProjectId) -> BoardGatewayResult<Vec<Task>> {
        Ok(self.list(project_id).await?)
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> BoardGatewayResult<Task> {
        Ok(Self::update_status(self, id, status).await?)
    }
}
