//! Given steps for board workflow BDD scenarios.

use eyre::WrapErr;
use rstest_bdd_macros::given;

use super::world::{BoardWorld, run_async};
use trestle::workflow::services::{CreateBoardRequest, CreateTaskRequest};

#[given("a board with the canonical columns")]
fn board_with_canonical_columns(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .gate
        .grant(world.caller, world.workspace)
        .wrap_err("grant workspace membership")?;
    let board = run_async(world.service.create_board(CreateBoardRequest::new(
        world.caller,
        world.workspace,
        "Sprint board",
    )))
    .wrap_err("create scenario board")?;
    world.board = Some(board);
    Ok(())
}

#[given(r#"a task titled "{title}" created in the "{column}" column"#)]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Step placeholders are captured as owned values"
)]
fn task_created_in_column(
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
    .wrap_err("create scenario task")?;
    world.task = Some(task);
    Ok(())
}
