//! Trestle: shared task-board core.
//!
//! This crate provides the authoritative engine behind a collaborative
//! task board: boards hold named, ordered columns, columns hold ordered
//! task references, and a task's lifecycle status is derived from the
//! name of the column it currently occupies.
//!
//! # Architecture
//!
//! Trestle follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, services)
//!
//! # Modules
//!
//! - [`board`]: Boards and their ordered columns of task references
//! - [`task`]: Task records and name-derived lifecycle status
//! - [`workflow`]: The move coordinator and the operation surface
//! - [`client`]: Client-local mirrors with optimistic apply and rollback

pub mod board;
pub mod client;
pub mod task;
pub mod workflow;
