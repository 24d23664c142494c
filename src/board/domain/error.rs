//! Error types for board domain validation.

use super::ColumnId;
use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board name is empty after trimming.
    #[error("board name must not be empty")]
    EmptyBoardName,

    /// The column name is empty after trimming.
    #[error("column name must not be empty")]
    EmptyColumnName,

    /// The column does not exist on the board.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// The task id is already present in the column's ordered list.
    #[error("task {task} is already listed in column {column}")]
    DuplicateTaskEntry {
        /// Column whose list already holds the task id.
        column: ColumnId,
        /// Task id that was offered twice.
        task: TaskId,
    },
}
