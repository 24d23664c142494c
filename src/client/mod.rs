//! Client-local mirrors with optimistic apply and rollback.
//!
//! A client keeps duplicate, local copies of the task records and the
//! per-board column/order view so drag interactions feel instantaneous.
//! Mutations are applied optimistically, issued to the authoritative
//! coordinator, and then either committed (adopting the authoritative
//! scalar fields while trusting local list order) or rolled back to the
//! exact pre-mutation snapshots.
//!
//! Status is derived locally with the very same
//! [`crate::task::domain::derive_status`] the coordinator uses, so the
//! optimistic and authoritative views cannot disagree on derivation.

mod workspace;

pub use workspace::{ClientError, ClientMove, ClientPatch, ClientWorkspace, PendingChange};

#[cfg(test)]
mod tests;
