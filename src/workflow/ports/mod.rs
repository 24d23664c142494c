//! Ports define the external collaborators the workflow layer consumes.

pub mod membership;

pub use membership::{MembershipGate, MembershipGateError, MembershipGateResult};

#[cfg(test)]
pub use membership::MockMembershipGate;
