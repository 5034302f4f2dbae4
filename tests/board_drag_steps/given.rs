//! Given steps for board drag BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use eyre::WrapErr;
use kanban::task::services::CreateTaskRequest;
use rstest_bdd_macros::given;

#[given(r#"the project has a task "{title}" in "{status}""#)]
fn project_has_task(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(world.project_id, title).with_status(parse_status(&status)?);
    run_async(world.service.create(request)).wrap_err("seed task for board scenario")?;
    Ok(())
}

#[given("the board is loaded")]
fn board_is_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.load_project(world.project_id)).wrap_err("load board")?;
    Ok(())
}

#[given("status updates fail")]
fn status_updates_fail(world: &mut BoardWorld) {
    world.gateway.fail_updates();
}
