//! Unit tests for board columns and the optimistic board manager.


use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskDraft, TaskStatus};
use mockable::DefaultClock;

/// Builds a task with the given title and status.
fn task(project_id: ProjectId, title: &str, status: TaskStatus) -> Task {
    let draft = TaskDraft::new(title)
        .expect("test titles are non-empty")
        .with_status(status);
    Task::new(project_id, draft, &DefaultClock)
}

/// Returns the titles of one column in order.
fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}
