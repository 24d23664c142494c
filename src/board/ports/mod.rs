//! Ports define infrastructure-agnostic interfaces used by board consumers.

pub mod repository;

pub use repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
