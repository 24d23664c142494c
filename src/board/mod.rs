//! Boards and their ordered columns of task references.
//!
//! A board belongs to one workspace and holds an ordered sequence of named
//! columns; each column holds the ordered list of task ids it displays.
//! The column lists are one half of a denormalized fact (the other half is
//! each task's own column field, see [`crate::task`]); only the move
//! coordinator in [`crate::workflow`] may change them. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
