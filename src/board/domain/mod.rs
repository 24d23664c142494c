//! Domain model for boards and their ordered columns.
//!
//! The board domain models the presentation side of the system: which
//! columns a board shows and, per column, the ordered task references. All
//! infrastructure concerns stay outside of the domain boundary.

mod board;
mod column;
mod error;
mod ids;

pub use board::{Board, BoardName, CANONICAL_COLUMN_NAMES, PersistedBoardData};
pub use column::{Column, ColumnName};
pub use error::BoardDomainError;
pub use ids::{BoardId, ColumnId, WorkspaceId};
