//! Task lifecycle status and the name-based derivation automaton.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived lifecycle status of a task.
///
/// Status is never set directly by a caller; it follows the semantic match
/// of the column the task occupies (see [`derive_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    #[serde(rename = "inprogress")]
    InProgress,
    /// Work has been completed.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives a lifecycle status from a column's display name.
///
/// Case-insensitive substring matching with fixed precedence: "to do" is
/// checked first, then "in progress", then "done"; the first match wins.
/// `None` means the name carries no recognized signal and the task's prior
/// status is retained.
///
/// This single function serves both the authoritative move coordinator and
/// the client reconciliation layer, so optimistic and authoritative status
/// can never drift.
#[must_use]
pub fn derive_status(column_name: &str) -> Option<TaskStatus> {
    let normalized = column_name.to_ascii_lowercase();
    if normalized.contains("to do") {
        return Some(TaskStatus::Todo);
    }
    if normalized.contains("in progress") {
        return Some(TaskStatus::InProgress);
    }
    if normalized.contains("done") {
        return Some(TaskStatus::Done);
    }
    None
}
