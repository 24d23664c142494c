//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use trestle::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Board, ColumnId, WorkspaceId},
};
use trestle::task::{adapters::memory::InMemoryTaskRepository, domain::UserId};
use trestle::workflow::{
    adapters::memory::InMemoryMembershipGate,
    services::{BoardWorkflowService, CreateBoardRequest},
};

/// Service type wired over the in-memory adapters.
pub type TestService = BoardWorkflowService<
    InMemoryTaskRepository,
    InMemoryBoardRepository,
    InMemoryMembershipGate,
    DefaultClock,
>;

/// Wired service with one member and one canonical board.
pub struct Scene {
    pub service: TestService,
    pub caller: UserId,
    pub workspace: WorkspaceId,
    pub board: Board,
}

/// Builds a scene with one granted member and a freshly created board.
///
/// # Errors
///
/// Returns an error if the membership grant or board creation fails.
pub async fn scene() -> Result<Scene, eyre::Report> {
    let gate = Arc::new(InMemoryMembershipGate::new());
    let service = BoardWorkflowService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryBoardRepository::new()),
        Arc::clone(&gate),
        Arc::new(DefaultClock),
    );
    let caller = UserId::new();
    let workspace = WorkspaceId::new();
    gate.grant(caller, workspace)
        .wrap_err("grant workspace membership")?;
    let board = service
        .create_board(CreateBoardRequest::new(caller, workspace, "Launch plan"))
        .await
        .wrap_err("create scene board")?;
    Ok(Scene {
        service,
        caller,
        workspace,
        board,
    })
}

/// Resolves a column id by display name on the given board.
///
/// # Errors
///
/// Returns an error if no column carries the given name.
pub fn column_id(board: &Board, name: &str) -> Result<ColumnId, eyre::Report> {
    board
        .columns()
        .iter()
        .find(|column| column.name().as_str() == name)
        .map(trestle::board::domain::Column::id)
        .ok_or_else(|| eyre::eyre!("no column named {name:?} on board"))
}
