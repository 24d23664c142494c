//! When steps for board workflow BDD scenarios.

use eyre::WrapErr;
use rstest_bdd_macros::when;

use super::world::{BoardWorld, run_async};
use trestle::workflow::services::{CreateTaskRequest, EditTaskRequest, MoveTaskRequest};

#[when(r#"a task titled "{title}" is created in the "{column}" column"#)]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Step placeholders are captured as owned values"
)]
fn create_task_in_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    let board_id = world.board()?.id();
    let task = run_async(world.service.create_task(CreateTaskRequest::new(
        world.caller,
        world.workspace,
        board_id,
        column_id,
        title,
    )))
    .wrap_err("create task")?;
    world.task = Some(task);
    Ok(())
}

#[when(r#"the task is moved to the "{column}" column at position {index:u64}"#)]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Step placeholders are captured as owned values"
)]
fn move_task_to_column(
    world: &mut BoardWorld,
    column: String,
    index: u64,
) -> Result<(), eyre::Report> {
    let destination = world.column(&column)?;
    let task = world.task()?;
    let source = task.column();
    let task_id = task.id();
    let position = usize::try_from(index).wrap_err("drop position out of range")?;
    let moved = run_async(world.service.move_task(MoveTaskRequest::new(
        world.caller,
        task_id,
        source,
        destination,
        position,
    )))
    .wrap_err("move task")?;
    world.task = Some(moved);
    Ok(())
}

#[when(r#"the task title is changed to "{title}""#)]
fn change_task_title(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let edited = run_async(
        world
            .service
            .edit_task(EditTaskRequest::new(world.caller, task_id).with_title(title)),
    )
    .wrap_err("edit task title")?;
    world.task = Some(edited);
    Ok(())
}
