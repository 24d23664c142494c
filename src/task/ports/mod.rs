//! Ports define infrastructure-agnostic interfaces used by task consumers.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
