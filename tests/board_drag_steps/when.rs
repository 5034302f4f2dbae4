//! When steps for board drag BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use kanban::board::domain::{DragEnd, DragLocation};
use rstest_bdd_macros::when;

#[when(r#"the task at "{from}" position {index:usize} is dropped on "{to}" position {target:usize}"#)]
fn drop_on_column(
    world: &mut BoardWorld,
    from: String,
    index: usize,
    to: String,
    target: usize,
) -> Result<(), eyre::Report> {
    let drag = DragEnd::new(
        DragLocation::new(parse_status(&from)?, index),
        DragLocation::new(parse_status(&to)?, target),
    );
    world.last_drag_result = Some(run_async(world.board.handle_drag_end(drag)));
    Ok(())
}

#[when(r#"the task at "{from}" position {index:usize} is dropped outside the board"#)]
fn drop_outside(world: &mut BoardWorld, from: String, index: usize) -> Result<(), eyre::Report> {
    let drag = DragEnd::cancelled(DragLocation::new(parse_status(&from)?, index));
    world.last_drag_result = Some(run_async(world.board.handle_drag_end(drag)));
    Ok(())
}
