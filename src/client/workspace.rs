//! Optimistic mirror of the authoritative task and board stores.

use crate::board::domain::{Board, BoardDomainError, BoardId, ColumnId};
use crate::task::domain::{Task, TaskId, TaskPatch, TaskStatus, derive_status};
use mockable::Clock;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by the client reconciliation layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The task is not present in the local mirror.
    #[error("task not mirrored locally: {0}")]
    UnknownTask(TaskId),

    /// The board is not present in the local mirror.
    #[error("board not mirrored locally: {0}")]
    UnknownBoard(BoardId),

    /// The column does not exist on the mirrored board.
    #[error("column not mirrored locally: {0}")]
    UnknownColumn(ColumnId),

    /// The authoritative snapshot does not belong to the pending change.
    #[error("authoritative snapshot is for task {got}, pending change is for task {expected}")]
    SnapshotMismatch {
        /// Task the pending change was captured for.
        expected: TaskId,
        /// Task the authoritative snapshot describes.
        got: TaskId,
    },

    /// The optimistic list mutation was rejected.
    #[error(transparent)]
    List(#[from] BoardDomainError),
}

/// A user-initiated move, expressed in local mirror terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientMove {
    /// Task being dragged.
    pub task: TaskId,
    /// Column the drag started in.
    pub source: ColumnId,
    /// Column the drag ended in.
    pub destination: ColumnId,
    /// Drop position within the destination list.
    pub index: usize,
}

/// A user-initiated scalar edit, expressed in local mirror terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPatch {
    /// Replacement title, if any. Validation is the coordinator's job; the
    /// mirror applies whatever the authoritative side will see.
    pub title: Option<crate::task::domain::Title>,
    /// Replacement description, if any.
    pub description: Option<String>,
}

/// Snapshot handle for one optimistic change.
///
/// Captured before the optimistic mutation; consumed by exactly one of
/// [`ClientWorkspace::commit`] or [`ClientWorkspace::rollback`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending change must be committed or rolled back"]
pub struct PendingChange {
    task: Task,
    board: Option<Board>,
}

impl PendingChange {
    /// Returns the id of the task the change concerns.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task.id()
    }
}

/// Client-local mirror of tasks and boards with optimistic mutation.
///
/// No locking exists between concurrent clients; conflicting moves resolve
/// last-write-wins upstream, and a full re-fetch ([`Self::load_board`],
/// [`Self::load_tasks`]) is the reconciliation remedy when mirrors drift.
#[derive(Debug, Clone)]
pub struct ClientWorkspace<C>
where
    C: Clock,
{
    clock: C,
    tasks: HashMap<TaskId, Task>,
    boards: HashMap<BoardId, Board>,
}

impl<C> ClientWorkspace<C>
where
    C: Clock,
{
    /// Creates an empty mirror.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            tasks: HashMap::new(),
            boards: HashMap::new(),
        }
    }

    /// Replaces the mirrored copy of a board with an authoritative snapshot.
    pub fn load_board(&mut self, board: Board) {
        self.boards.insert(board.id(), board);
    }

    /// Replaces mirrored task records with authoritative snapshots.
    pub fn load_tasks(&mut self, tasks: impl IntoIterator<Item = Task>) {
        for task in tasks {
            self.tasks.insert(task.id(), task);
        }
    }

    /// Drops a task from the mirror (after an authoritative delete).
    pub fn forget_task(&mut self, task_id: TaskId) {
        self.tasks.remove(&task_id);
    }

    /// Returns the mirrored task, if present.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(&task_id)
    }

    /// Returns the mirrored board, if present.
    #[must_use]
    pub fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.boards.get(&board_id)
    }

    /// Applies a move optimistically to both mirrors.
    ///
    /// Captures pre-mutation snapshots of the task and its board, derives
    /// the destination status locally, rewrites the mirrored lists, and
    /// patches the mirrored task's column/status fields. The returned
    /// handle must later be passed to [`Self::commit`] or
    /// [`Self::rollback`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the task, board, or a column is not
    /// mirrored, or when the optimistic list mutation is rejected. The
    /// mirrors are untouched on error.
    pub fn begin_move(&mut self, request: ClientMove) -> Result<PendingChange, ClientError> {
        let task_snapshot = self
            .tasks
            .get(&request.task)
            .cloned()
            .ok_or(ClientError::UnknownTask(request.task))?;
        let board_snapshot = self
            .boards
            .get(&task_snapshot.board())
            .cloned()
            .ok_or_else(|| ClientError::UnknownBoard(task_snapshot.board()))?;

        let derived = {
            let destination = board_snapshot
                .column(request.destination)
                .ok_or(ClientError::UnknownColumn(request.destination))?;
            derive_status(destination.name().as_str())
        };
        if board_snapshot.column(request.source).is_none() {
            return Err(ClientError::UnknownColumn(request.source));
        }

        // Mutate working copies first so a rejected insert leaves the
        // mirrors exactly as they were.
        let mut board = board_snapshot.clone();
        board.remove_task(request.source, request.task)?;
        board.insert_task(request.destination, request.task, request.index)?;

        let mut task = task_snapshot.clone();
        task.relocate(request.destination, derived, &self.clock);

        self.boards.insert(board.id(), board);
        self.tasks.insert(task.id(), task);
        Ok(PendingChange {
            task: task_snapshot,
            board: Some(board_snapshot),
        })
    }

    /// Applies a scalar edit optimistically to the task mirror.
    ///
    /// Mirrors the coordinator's automatic promotion: a `todo` task on a
    /// board with an "in progress"-matching column relocates to the head of
    /// that column locally as well.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the task (or, for promotion, its board)
    /// is not mirrored, or when the optimistic list mutation is rejected.
    pub fn begin_edit(
        &mut self,
        task_id: TaskId,
        patch: ClientPatch,
    ) -> Result<PendingChange, ClientError> {
        let task_snapshot = self
            .tasks
            .get(&task_id)
            .cloned()
            .ok_or(ClientError::UnknownTask(task_id))?;
        let field_patch = TaskPatch {
            title: patch.title,
            description: patch.description,
        };

        let mut task = task_snapshot.clone();
        if task.status() == TaskStatus::Todo {
            let board_snapshot = self
                .boards
                .get(&task.board())
                .cloned()
                .ok_or_else(|| ClientError::UnknownBoard(task.board()))?;
            let progress = board_snapshot
                .column_matching(TaskStatus::InProgress)
                .map(|column| column.id());
            if let Some(progress_id) = progress {
                let previous_column = task.column();
                let mut board = board_snapshot.clone();
                if board.column(previous_column).is_some() {
                    board.remove_task(previous_column, task_id)?;
                }
                board.insert_task(progress_id, task_id, 0)?;

                task.apply_patch(field_patch, &self.clock);
                task.relocate(progress_id, Some(TaskStatus::InProgress), &self.clock);
                self.boards.insert(board.id(), board);
                self.tasks.insert(task_id, task);
                return Ok(PendingChange {
                    task: task_snapshot,
                    board: Some(board_snapshot),
                });
            }
        }

        task.apply_patch(field_patch, &self.clock);
        self.tasks.insert(task_id, task);
        Ok(PendingChange {
            task: task_snapshot,
            board: None,
        })
    }

    /// Confirms an optimistic change with the authoritative task snapshot.
    ///
    /// Only the task's scalar fields (column, status, timestamps, title,
    /// description) are overwritten; the locally computed list order is
    /// trusted as-is and no board state is re-fetched.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::SnapshotMismatch`] when the snapshot belongs
    /// to a different task than the pending change.
    pub fn commit(
        &mut self,
        pending: PendingChange,
        authoritative: Task,
    ) -> Result<(), ClientError> {
        let PendingChange { task: snapshot, .. } = pending;
        if authoritative.id() != snapshot.id() {
            return Err(ClientError::SnapshotMismatch {
                expected: snapshot.id(),
                got: authoritative.id(),
            });
        }
        self.tasks.insert(authoritative.id(), authoritative);
        Ok(())
    }

    /// Rolls an optimistic change back to the captured snapshots.
    ///
    /// Both mirrors are restored exactly as they were before the optimistic
    /// apply; the user sees the change disappear.
    pub fn rollback(&mut self, pending: PendingChange) {
        self.tasks.insert(pending.task.id(), pending.task);
        if let Some(board) = pending.board {
            self.boards.insert(board.id(), board);
        }
    }
}
