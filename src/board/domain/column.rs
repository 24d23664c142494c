//! Column value objects: validated names and ordered task-id lists.

use super::{BoardDomainError, ColumnId};
use crate::task::domain::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated display name for a column.
///
/// The name is the only signal of a column's semantic role; status
/// derivation matches against it (see [`crate::task::domain::derive_status`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnName(String);

impl ColumnName {
    /// Creates a validated column name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, BoardDomainError> {
        let trimmed = name.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyColumnName);
        }
        Ok(Self(trimmed))
    }

    /// Returns the display name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered list of task references embedded within a board.
///
/// The list is the presentation order of the column. It never contains the
/// same task id twice, and the primitives here uphold that on their own;
/// keeping the list consistent with each task's own column field is the
/// move coordinator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    name: ColumnName,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column with a fresh identifier.
    #[must_use]
    pub fn new(name: ColumnName) -> Self {
        Self {
            id: ColumnId::new(),
            name,
            task_ids: Vec::new(),
        }
    }

    /// Reconstructs a column from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: ColumnId, name: ColumnName, task_ids: Vec<TaskId>) -> Self {
        Self { id, name, task_ids }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column display name.
    #[must_use]
    pub const fn name(&self) -> &ColumnName {
        &self.name
    }

    /// Returns the ordered task references.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns whether the column lists the given task id.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task_ids.contains(&task_id)
    }

    /// Returns the position of the given task id within the list, if listed.
    #[must_use]
    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| *id == task_id)
    }

    /// Removes a task id from the list.
    ///
    /// Idempotent: removing an absent id is a no-op. Returns whether the id
    /// was present.
    pub fn remove_task(&mut self, task_id: TaskId) -> bool {
        let before = self.task_ids.len();
        self.task_ids.retain(|id| *id != task_id);
        self.task_ids.len() != before
    }

    /// Inserts a task id at the given index, clamped to `[0, len]`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTaskEntry`] when the id is
    /// already listed; callers reposition by removing first.
    pub fn insert_task(&mut self, task_id: TaskId, index: usize) -> Result<(), BoardDomainError> {
        if self.contains(task_id) {
            return Err(BoardDomainError::DuplicateTaskEntry {
                column: self.id,
                task: task_id,
            });
        }
        let clamped = index.min(self.task_ids.len());
        self.task_ids.insert(clamped, task_id);
        Ok(())
    }
}
