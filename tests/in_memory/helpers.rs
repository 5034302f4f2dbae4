//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use kanban::identity::{
    adapters::InMemoryIdentityProvider,
    domain::{User, UserId},
};
use kanban::project::{adapters::memory::InMemoryProjectRepository, services::ProjectStore};
use kanban::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use mockable::DefaultClock;
use rstest::fixture;

/// Task service over an in-memory repository.
pub type MemoryTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Project store over in-memory adapters.
pub type MemoryProjectStore =
    ProjectStore<InMemoryProjectRepository, InMemoryIdentityProvider, DefaultClock>;

/// Provides a fresh task service for each test.
#[fixture]
pub fn task_service() -> Arc<MemoryTaskService> {
    Arc::new(TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    ))
}

/// Returns a signed-in student user.
#[must_use]
pub fn student(id: &str) -> User {
    User::new(UserId::new(id)).with_email(format!("{id}@campus.example"))
}

/// Wired project store with handles on its collaborators.
pub struct ProjectFixture {
    /// Project repository shared with the store.
    pub repository: Arc<InMemoryProjectRepository>,
    /// Identity provider shared with the store.
    pub identity: Arc<InMemoryIdentityProvider>,
    /// Store under test.
    pub store: MemoryProjectStore,
}

/// Provides a project store with `sam` signed in.
#[fixture]
pub fn projects() -> ProjectFixture {
    let repository = Arc::new(InMemoryProjectRepository::new());
    let identity = Arc::new(InMemoryIdentityProvider::signed_in(student("sam")));
    let store = ProjectStore::new(
        Arc::clone(&repository),
        Arc::clone(&identity),
        Arc::new(DefaultClock),
    );
    ProjectFixture {
        repository,
        identity,
        store,
    }
}
