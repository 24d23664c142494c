//! Task records and name-derived lifecycle status.
//!
//! A task is a standalone record owned by exactly one board and located in
//! exactly one column at a time. Its status is never set directly: the
//! automaton in [`domain::derive_status`] maps the occupied column's display
//! name to `todo`, `inprogress`, or `done`. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
