//! Board aggregate root owning the ordered columns.

use super::{BoardDomainError, BoardId, Column, ColumnId, ColumnName, WorkspaceId};
use crate::task::domain::{TaskId, TaskStatus, derive_status};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display names of the three canonical columns every new board starts with.
pub const CANONICAL_COLUMN_NAMES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Validated display name for a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardName(String);

impl BoardName {
    /// Creates a validated board name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, BoardDomainError> {
        let trimmed = name.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyBoardName);
        }
        Ok(Self(trimmed))
    }

    /// Returns the display name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board aggregate root.
///
/// Owns the ordered columns and, through them, the presentation order of
/// every task on the board. Column lists are only ever mutated through the
/// move coordinator in [`crate::workflow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    workspace: WorkspaceId,
    name: BoardName,
    columns: Vec<Column>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted board aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted owning workspace.
    pub workspace: WorkspaceId,
    /// Persisted display name.
    pub name: BoardName,
    /// Persisted columns in presentation order.
    pub columns: Vec<Column>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Creates a board with the three canonical empty columns.
    #[must_use]
    pub fn new(workspace: WorkspaceId, name: BoardName, clock: &impl Clock) -> Self {
        let columns = CANONICAL_COLUMN_NAMES
            .iter()
            // Canonical names are non-empty literals; validation cannot fail.
            .filter_map(|canonical| ColumnName::new(*canonical).map(Column::new).ok())
            .collect();
        Self {
            id: BoardId::new(),
            workspace,
            name,
            columns,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        Self {
            id: data.id,
            workspace: data.workspace,
            name: data.name,
            columns: data.columns,
            created_at: data.created_at,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the owning workspace identifier.
    #[must_use]
    pub const fn workspace(&self) -> WorkspaceId {
        self.workspace
    }

    /// Returns the board display name.
    #[must_use]
    pub const fn name(&self) -> &BoardName {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the columns in presentation order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Resolves a column by identifier.
    #[must_use]
    pub fn column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns the column currently listing the given task id, if any.
    #[must_use]
    pub fn column_of(&self, task_id: TaskId) -> Option<&Column> {
        self.columns.iter().find(|column| column.contains(task_id))
    }

    /// Returns the first column whose name derives the given status.
    ///
    /// Columns are scanned in presentation order, so "first" follows the
    /// board layout the user sees.
    #[must_use]
    pub fn column_matching(&self, status: TaskStatus) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| derive_status(column.name().as_str()) == Some(status))
    }

    /// Removes a task id from the given column's list.
    ///
    /// Idempotent with respect to the id: removing an absent id succeeds and
    /// reports `false`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownColumn`] when the column does not
    /// exist on this board.
    pub fn remove_task(
        &mut self,
        column_id: ColumnId,
        task_id: TaskId,
    ) -> Result<bool, BoardDomainError> {
        let column = self.column_entry(column_id)?;
        Ok(column.remove_task(task_id))
    }

    /// Inserts a task id into the given column's list at a clamped index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownColumn`] when the column does not
    /// exist on this board, or [`BoardDomainError::DuplicateTaskEntry`] when
    /// the id is already listed in that column.
    pub fn insert_task(
        &mut self,
        column_id: ColumnId,
        task_id: TaskId,
        index: usize,
    ) -> Result<(), BoardDomainError> {
        let column = self.column_entry(column_id)?;
        column.insert_task(task_id, index)
    }

    fn column_entry(&mut self, column_id: ColumnId) -> Result<&mut Column, BoardDomainError> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
            .ok_or(BoardDomainError::UnknownColumn(column_id))
    }
}
