//! Then steps for board drag BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use rstest_bdd_macros::then;

#[then(r#"the "{status}" column shows "{titles}""#)]
fn column_shows(world: &BoardWorld, status: String, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    let columns = world.board.columns();
    let actual: Vec<&str> = columns
        .column(parse_status(&status)?)
        .iter()
        .map(|task| task.title())
        .collect();

    if actual != expected {
        return Err(eyre::eyre!(
            "expected {status} column {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the "{status}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let columns = world.board.columns();
    let column = columns.column(parse_status(&status)?);
    if !column.is_empty() {
        return Err(eyre::eyre!("expected {status} column to be empty, found {} tasks", column.len()));
    }
    Ok(())
}

#[then(r#"the stored status of "{title}" is "{status}""#)]
fn stored_status_is(world: &BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let tasks = run_async(world.service.list(world.project_id))?;
    let task = tasks
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("no stored task titled {title:?}"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected {title:?} stored as {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the board reports "{message}""#)]
fn board_reports(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let error = world.board.error();
    if error.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected error {message:?}, found {error:?}"));
    }
    let failed = world
        .last_drag_result
        .as_ref()
        .is_some_and(Result::is_err);
    if !failed {
        return Err(eyre::eyre!("expected the drag to fail"));
    }
    Ok(())
}

#[then("the board reports no error")]
fn board_reports_no_error(world: &BoardWorld) -> Result<(), eyre::Report> {
    if let Some(error) = world.board.error() {
        return Err(eyre::eyre!("unexpected board error {error:?}"));
    }
    match world.last_drag_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        other => Err(eyre::eyre!("expected a successful drag, got {other:?}")),
    }
}
