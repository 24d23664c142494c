//! Client mirror and coordinator running side by side.
//!
//! Each test plays the round trip a UI performs: mirror the authoritative
//! state, apply an optimistic change, send the real request, then commit or
//! roll back depending on the outcome.

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::rstest;

use super::helpers::{Scene, column_id, scene};
use trestle::client::{ClientMove, ClientPatch, ClientWorkspace};
use trestle::task::domain::{Task, TaskStatus, Title};
use trestle::workflow::services::{CreateTaskRequest, EditTaskRequest, MoveTaskRequest};

/// Mirrors the scene's board and tasks into a fresh client workspace.
///
/// # Errors
///
/// Returns an error if the authoritative fetches fail.
async fn mirror(s: &Scene) -> Result<ClientWorkspace<DefaultClock>, eyre::Report> {
    let mut client = ClientWorkspace::new(DefaultClock);
    let board = s
        .service
        .board(s.caller, s.board.id())
        .await
        .wrap_err("fetch board for mirror")?;
    client.load_board(board);
    let tasks = s
        .service
        .tasks_by_board(s.caller, s.board.id())
        .await
        .wrap_err("fetch tasks for mirror")?;
    client.load_tasks(tasks);
    Ok(client)
}

/// Creates a task in the scene's "To Do" column.
///
/// # Errors
///
/// Returns an error if column resolution or creation fails.
async fn seeded_task(s: &Scene, title: &str) -> Result<Task, eyre::Report> {
    let todo = column_id(&s.board, "To Do")?;
    s.service
        .create_task(CreateTaskRequest::new(
            s.caller,
            s.workspace,
            s.board.id(),
            todo,
            title,
        ))
        .await
        .wrap_err("seed task")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmed_move_adopts_the_authoritative_record() {
    let s = scene().await.expect("scene");
    let task = seeded_task(&s, "Ship it").await.expect("seed task");
    let todo = column_id(&s.board, "To Do").expect("column");
    let done = column_id(&s.board, "Done").expect("column");
    let mut client = mirror(&s).await.expect("mirror");

    let pending = client
        .begin_move(ClientMove {
            task: task.id(),
            source: todo,
            destination: done,
            index: 0,
        })
        .expect("optimistic move should apply");
    // The UI already shows the task as done with a local timestamp.
    assert_eq!(
        client.task(task.id()).expect("mirrored").status(),
        TaskStatus::Done
    );

    let authoritative = s
        .service
        .move_task(MoveTaskRequest::new(s.caller, task.id(), todo, done, 0))
        .await
        .expect("move should succeed");
    client
        .commit(pending, authoritative.clone())
        .expect("commit should succeed");

    // Scalars now match the server record exactly; the local list order
    // stands without a board re-fetch.
    let mirrored = client.task(task.id()).expect("mirrored");
    assert_eq!(mirrored.completed_at(), authoritative.completed_at());
    assert_eq!(mirrored.updated_at(), authoritative.updated_at());
    let board = client.board(s.board.id()).expect("mirrored board");
    assert_eq!(board.column(done).expect("column").task_ids(), [task.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_move_rolls_the_mirrors_back() {
    let s = scene().await.expect("scene");
    let task = seeded_task(&s, "Ship it").await.expect("seed task");
    let todo = column_id(&s.board, "To Do").expect("column");
    let progress = column_id(&s.board, "In Progress").expect("column");
    let done = column_id(&s.board, "Done").expect("column");
    let mut client = mirror(&s).await.expect("mirror");

    let pending = client
        .begin_move(ClientMove {
            task: task.id(),
            source: todo,
            destination: done,
            index: 0,
        })
        .expect("optimistic move should apply");

    // Another client moved the task first, so the stale source is rejected.
    s.service
        .move_task(MoveTaskRequest::new(
            s.caller,
            task.id(),
            todo,
            progress,
            0,
        ))
        .await
        .expect("concurrent move should succeed");
    let outcome = s
        .service
        .move_task(MoveTaskRequest::new(s.caller, task.id(), todo, done, 0))
        .await;
    assert!(outcome.is_err(), "stale source must be rejected");

    client.rollback(pending);
    let mirrored = client.task(task.id()).expect("mirrored");
    assert_eq!(mirrored.status(), TaskStatus::Todo);
    assert_eq!(mirrored.column(), todo);
    let board = client.board(s.board.id()).expect("mirrored board");
    assert_eq!(board.column(todo).expect("column").task_ids(), [task.id()]);
    assert!(board.column(done).expect("column").task_ids().is_empty());

    // A full re-fetch then converges the mirror on the winning move.
    let refreshed = mirror(&s).await.expect("mirror");
    let current = refreshed.task(task.id()).expect("mirrored");
    assert_eq!(current.status(), TaskStatus::InProgress);
    assert_eq!(current.column(), progress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_promotion_matches_on_both_sides() {
    let s = scene().await.expect("scene");
    let task = seeded_task(&s, "Draft notes").await.expect("seed task");
    let progress = column_id(&s.board, "In Progress").expect("column");
    let mut client = mirror(&s).await.expect("mirror");

    let title = Title::new("Draft notes v2").expect("valid title");
    let pending = client
        .begin_edit(
            task.id(),
            ClientPatch {
                title: Some(title),
                description: None,
            },
        )
        .expect("optimistic edit should apply");

    let authoritative = s
        .service
        .edit_task(EditTaskRequest::new(s.caller, task.id()).with_title("Draft notes v2"))
        .await
        .expect("edit should succeed");
    client
        .commit(pending, authoritative.clone())
        .expect("commit should succeed");

    let mirrored = client.task(task.id()).expect("mirrored");
    assert_eq!(mirrored.status(), TaskStatus::InProgress);
    assert_eq!(mirrored.column(), progress);
    assert_eq!(mirrored.title().as_str(), "Draft notes v2");
    assert_eq!(mirrored.started_at(), authoritative.started_at());
    let board = client.board(s.board.id()).expect("mirrored board");
    assert_eq!(
        board.column(progress).expect("column").task_ids(),
        [task.id()]
    );
}
