//! The move coordinator and the external operation surface.
//!
//! Every operation that touches a task's column membership funnels through
//! [`services::BoardWorkflowService`], which keeps the task store and the
//! board's column lists in lockstep, derives statuses from destination
//! column names, and consults the external membership collaborator before
//! acting. The module follows hexagonal architecture:
//!
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod ports;
pub mod services;
