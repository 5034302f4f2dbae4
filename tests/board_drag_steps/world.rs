//! Shared world state for board drag BDD scenarios.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use kanban::board::{
    domain::DragOutcome,
    ports::{BoardGateway, BoardGatewayError, BoardGatewayResult},
    services::{BoardError, TaskBoard},
};
use kanban::project::domain::ProjectId;
use kanban::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId, TaskStatus},
    services::TaskService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Task service used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Gateway over the task service whose writes can be switched off.
pub struct SwitchableGateway {
    service: Arc<TestTaskService>,
    failing: AtomicBool,
}

impl SwitchableGateway {
    /// Makes every later status update fail.
    pub fn fail_updates(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BoardGateway for SwitchableGateway {
    async fn list_tasks(&self, project_id: ProjectId) -> BoardGatewayResult<Vec<Task>> {
        self.service.list_tasks(project_id).await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> BoardGatewayResult<Task> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(BoardGatewayError::Unavailable("connection reset".to_owned()));
        }
        BoardGateway::update_status(&*self.service, id, status).await
    }
}

/// Scenario world for board drag behaviour tests.
pub struct BoardWorld {
    pub service: Arc<TestTaskService>,
    pub gateway: Arc<SwitchableGateway>,
    pub board: TaskBoard<SwitchableGateway>,
    pub project_id: ProjectId,
    pub last_drag_result: Option<Result<DragOutcome, BoardError>>,
}

impl BoardWorld {
    /// Creates a world with an empty project and board.
    #[must_use]
    pub fn new() -> Self {
        let service = Arc::new(TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        ));
        let gateway = Arc::new(SwitchableGateway {
            service: Arc::clone(&service),
            failing: AtomicBool::new(false),
        });
        let board = TaskBoard::new(Arc::clone(&gateway));

        Self {
            service,
            gateway,
            board,
            project_id: ProjectId::new(),
            last_drag_result: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a status named in a scenario.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
