//! Domain model for task records and derived lifecycle status.
//!
//! The task domain models individual task records, their scalar fields, and
//! the status-derivation automaton that maps column display names to
//! lifecycle statuses, while keeping all infrastructure concerns outside of
//! the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, Title, UserId};
pub use status::{TaskStatus, derive_status};
pub use task::{NewTaskData, PersistedTaskData, Task, TaskPatch};
