//! In-memory adapters for the workflow context.

mod membership;

pub use membership::InMemoryMembershipGate;
