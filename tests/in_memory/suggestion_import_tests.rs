//! Generating suggestions and importing them onto a board.

use std::sync::Arc;

use kanban::board::services::TaskBoard;
use kanban::project::domain::ProjectId;
use kanban::suggestion::{
    adapters::StaticGenerationClient, domain::SuggestionError, services::SuggestionPipeline,
};
use kanban::task::domain::{TaskPriority, TaskStatus};
use rstest::rstest;
use serde_json::json;

use super::helpers::{MemoryTaskService, task_service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_suggestions_land_in_todo(
    task_service: Arc<MemoryTaskService>,
) -> Result<(), eyre::Report> {
    let reply = json!([
        {"title": "Pick a topic", "description": "Shortlist three ideas", "priority": "High"},
        {"title": "Book a meeting", "description": "Talk to the advisor", "priority": "Urgent"},
        {"title": "Read papers", "description": "Skim five abstracts", "priority": "Low"},
    ]);
    let client = Arc::new(StaticGenerationClient::replying(format!("```json\n{reply}\n```")));
    let pipeline = SuggestionPipeline::new(Arc::clone(&client));
    let project_id = ProjectId::new();
    let board = TaskBoard::new(Arc::clone(&task_service));
    board.load_project(project_id).await?;

    let suggestions = pipeline.suggest("Write my final-year thesis").await?;
    let imported = task_service
        .import_suggestions(project_id, &suggestions)
        .await?;
    let added = board.insert_tasks(imported.clone());

    eyre::ensure!(added == 2, "two valid suggestions, got {added}");
    let columns = board.columns();
    let todo = columns.column(TaskStatus::Todo);
    eyre::ensure!(todo.len() == 2, "both imports should be in todo");
    eyre::ensure!(
        todo.first().map(|task| task.priority()) == Some(TaskPriority::High),
        "order and priority preserved"
    );
    let prompt = client
        .requests()
        .first()
        .and_then(|request| request.prompt().map(str::to_owned))
        .ok_or_else(|| eyre::eyre!("the provider should have been called"))?;
    eyre::ensure!(prompt.contains("Write my final-year thesis"), "prompt embeds description");

    let reloaded = task_service.list(project_id).await?;
    eyre::ensure!(reloaded == imported, "imports are persisted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_description_never_reaches_the_provider() -> Result<(), eyre::Report> {
    let client = Arc::new(StaticGenerationClient::replying("[]"));
    let pipeline = SuggestionPipeline::new(Arc::clone(&client));

    let result = pipeline.suggest("  ").await;

    eyre::ensure!(result == Err(SuggestionError::EmptyDescription), "unexpected {result:?}");
    eyre::ensure!(client.requests().is_empty(), "no request should be sent");
    Ok(())
}
