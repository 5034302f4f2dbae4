//! Board flows against the in-memory task service.

use std::sync::Arc;

use kanban::board::{
    domain::{DragEnd, DragLocation, DragOutcome},
    services::TaskBoard,
};
use kanban::project::domain::ProjectId;
use kanban::task::{
    domain::{TaskPriority, TaskStatus},
    services::CreateTaskRequest,
};
use rstest::rstest;

use super::helpers::{MemoryTaskService, task_service};

async fn seed(service: &MemoryTaskService, project_id: ProjectId) -> Result<(), eyre::Report> {
    for (title, status) in [
        ("Outline chapters", TaskStatus::Todo),
        ("Collect sources", TaskStatus::Todo),
        ("Draft intro", TaskStatus::InProgress),
    ] {
        service
            .create(CreateTaskRequest::new(project_id, title).with_status(status))
            .await?;
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_to_done_persists_through_the_service(
    task_service: Arc<MemoryTaskService>,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new();
    seed(&task_service, project_id).await?;
    let board = TaskBoard::new(Arc::clone(&task_service));
    board.load_project(project_id).await?;

    let outcome = board
        .handle_drag_end(DragEnd::new(
            DragLocation::new(TaskStatus::InProgress, 0),
            DragLocation::new(TaskStatus::Done, 0),
        ))
        .await?;

    let DragOutcome::Moved { task, .. } = outcome else {
        eyre::bail!("expected a cross-column move");
    };
    let stored = task_service
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("moved task should exist"))?;
    eyre::ensure!(stored.status() == TaskStatus::Done, "status not persisted");
    eyre::ensure!(
        board.columns().column(TaskStatus::InProgress).is_empty(),
        "in-progress column should be empty"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_a_deleted_task_rolls_back(
    task_service: Arc<MemoryTaskService>,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new();
    seed(&task_service, project_id).await?;
    let board = TaskBoard::new(Arc::clone(&task_service));
    board.load_project(project_id).await?;
    let before = board.columns();
    let doomed = before
        .column(TaskStatus::Todo)
        .first()
        .ok_or_else(|| eyre::eyre!("todo column should not be empty"))?
        .id();
    task_service.delete(doomed).await?;

    let result = board
        .handle_drag_end(DragEnd::new(
            DragLocation::new(TaskStatus::Todo, 0),
            DragLocation::new(TaskStatus::Done, 0),
        ))
        .await;

    eyre::ensure!(result.is_err(), "update of a deleted task should fail");
    eyre::ensure!(board.columns() == before, "columns should be restored");
    eyre::ensure!(board.error().is_some(), "an error should be recorded");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switching_projects_replaces_the_board(
    task_service: Arc<MemoryTaskService>,
) -> Result<(), eyre::Report> {
    let first = ProjectId::new();
    let second = ProjectId::new();
    seed(&task_service, first).await?;
    let only = task_service
        .create(CreateTaskRequest::new(second, "Lone task").with_priority(TaskPriority::High))
        .await?;
    let board = TaskBoard::new(Arc::clone(&task_service));

    board.load_project(first).await?;
    eyre::ensure!(board.tasks().len() == 3, "first project has three tasks");
    board.load_project(second).await?;

    eyre::ensure!(board.tasks() == vec![only], "board should show only the second project");
    Ok(())
}
