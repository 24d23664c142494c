//! In-memory membership gate.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::board::domain::WorkspaceId;
use crate::task::domain::UserId;
use crate::workflow::ports::{MembershipGate, MembershipGateError, MembershipGateResult};

/// Thread-safe in-memory membership gate.
///
/// Stands in for the external membership collaborator in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMembershipGate {
    members: Arc<RwLock<HashSet<(UserId, WorkspaceId)>>>,
}

impl InMemoryMembershipGate {
    /// Creates a gate with no members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants the user membership of the workspace.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipGateError::Unavailable`] when the member set lock
    /// is poisoned.
    pub fn grant(&self, user: UserId, workspace: WorkspaceId) -> MembershipGateResult<()> {
        let mut members = self.members.write().map_err(|err| {
            MembershipGateError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        members.insert((user, workspace));
        Ok(())
    }

    /// Revokes the user's membership of the workspace.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipGateError::Unavailable`] when the member set lock
    /// is poisoned.
    pub fn revoke(&self, user: UserId, workspace: WorkspaceId) -> MembershipGateResult<()> {
        let mut members = self.members.write().map_err(|err| {
            MembershipGateError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        members.remove(&(user, workspace));
        Ok(())
    }
}

#[async_trait]
impl MembershipGate for InMemoryMembershipGate {
    async fn is_member(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> MembershipGateResult<bool> {
        let members = self.members.read().map_err(|err| {
            MembershipGateError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(members.contains(&(user, workspace)))
    }
}
