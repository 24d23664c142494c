//! Task aggregate root and related lifecycle types.

use super::{TaskId, TaskStatus, Title, UserId};
use crate::board::domain::{BoardId, ColumnId, WorkspaceId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameter object for creating a fresh task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Validated task title.
    pub title: Title,
    /// Free-form description, if any.
    pub description: Option<String>,
    /// Assigned user, if any.
    pub assignee: Option<UserId>,
    /// Workspace owning the board.
    pub workspace: WorkspaceId,
    /// Owning board.
    pub board: BoardId,
    /// Column the task starts in.
    pub column: ColumnId,
    /// Status derived from the starting column's name.
    pub initial_status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted assignee.
    pub assignee: Option<UserId>,
    /// Persisted owning workspace.
    pub workspace: WorkspaceId,
    /// Persisted owning board.
    pub board: BoardId,
    /// Persisted current column.
    pub column: ColumnId,
    /// Persisted derived status.
    pub status: TaskStatus,
    /// Persisted start timestamp.
    pub started_at: DateTime<Utc>,
    /// Persisted completion timestamp, if the task ever entered `done`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Scalar field patch applied by an edit.
///
/// `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title, if any.
    pub title: Option<Title>,
    /// Replacement description, if any.
    pub description: Option<String>,
}

impl TaskPatch {
    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Task aggregate root.
///
/// The `column` field is the task's half of a denormalized fact; the other
/// half is the owning board's column list (see [`crate::board`]). The move
/// coordinator keeps the two in lockstep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: Title,
    description: Option<String>,
    assignee: Option<UserId>,
    workspace: WorkspaceId,
    board: BoardId,
    column: ColumnId,
    status: TaskStatus,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task placed in its starting column.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            workspace: data.workspace,
            board: data.board,
            column: data.column,
            status: data.initial_status,
            started_at: timestamp,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            workspace: data.workspace,
            board: data.board,
            column: data.column,
            status: data.status,
            started_at: data.started_at,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the owning workspace identifier.
    #[must_use]
    pub const fn workspace(&self) -> WorkspaceId {
        self.workspace
    }

    /// Returns the owning board identifier.
    #[must_use]
    pub const fn board(&self) -> BoardId {
        self.board
    }

    /// Returns the current column identifier.
    #[must_use]
    pub const fn column(&self) -> ColumnId {
        self.column
    }

    /// Returns the derived lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the completion timestamp, if the task ever entered `done`.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Relocates the task to a column, applying the derived status.
    ///
    /// `derived` is the automaton's verdict on the destination column's
    /// name; `None` leaves the prior status in place while still updating
    /// the column reference. The first transition into
    /// [`TaskStatus::Done`] records the completion timestamp; later
    /// re-entries leave it untouched.
    pub fn relocate(
        &mut self,
        column: ColumnId,
        derived: Option<TaskStatus>,
        clock: &impl Clock,
    ) {
        self.column = column;
        if let Some(status) = derived {
            if status == TaskStatus::Done && self.completed_at.is_none() {
                self.completed_at = Some(clock.utc());
            }
            self.status = status;
        }
        self.touch(clock);
    }

    /// Applies a scalar field patch.
    ///
    /// Status side effects of edits (automatic promotion out of `todo`) are
    /// the move coordinator's concern, not the aggregate's.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        self.touch(clock);
    }

    /// Reassigns the task.
    pub fn assign(&mut self, assignee: Option<UserId>, clock: &impl Clock) {
        self.assignee = assignee;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
