//! Then steps for board workflow BDD scenarios.

use eyre::WrapErr;
use rstest_bdd_macros::then;

use super::world::{BoardWorld, run_async};

#[then(r#"the task sits at position {index:u64} of the "{column}" column"#)]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Step placeholders are captured as owned values"
)]
fn task_sits_at_position(
    world: &BoardWorld,
    index: u64,
    column: String,
) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    let board_id = world.board()?.id();
    let task_id = world.task()?.id();
    let board = run_async(world.service.board(world.caller, board_id))
        .wrap_err("fetch board for position check")?;
    let listed = board
        .column(column_id)
        .ok_or_else(|| eyre::eyre!("column {column:?} missing from fetched board"))?;
    let position = listed
        .position_of(task_id)
        .ok_or_else(|| eyre::eyre!("task not listed in the {column:?} column"))?;
    let expected = usize::try_from(index).wrap_err("position out of range")?;
    eyre::ensure!(
        position == expected,
        "expected position {expected}, found {position}"
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Step placeholders are captured as owned values"
)]
fn task_status_is(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    eyre::ensure!(
        task.status().as_str() == status,
        "expected status {status:?}, found {:?}",
        task.status().as_str()
    );
    Ok(())
}

#[then("the task has a completion timestamp")]
fn task_has_completion_timestamp(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    eyre::ensure!(
        task.completed_at().is_some(),
        "expected a completion timestamp on the task"
    );
    Ok(())
}

#[then(r#"the "{column}" column is empty"#)]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Step placeholders are captured as owned values"
)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    let board_id = world.board()?.id();
    let board = run_async(world.service.board(world.caller, board_id))
        .wrap_err("fetch board for emptiness check")?;
    let listed = board
        .column(column_id)
        .ok_or_else(|| eyre::eyre!("column {column:?} missing from fetched board"))?;
    eyre::ensure!(
        listed.task_ids().is_empty(),
        "expected the {column:?} column to be empty, found {} tasks",
        listed.task_ids().len()
    );
    Ok(())
}
