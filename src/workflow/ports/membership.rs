//! Membership port for workspace access checks.
//!
//! Workspace membership is owned by an external collaborator; this port is
//! the narrow interface the move coordinator consults before every
//! operation.

use crate::board::domain::WorkspaceId;
use crate::task::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for membership gate operations.
pub type MembershipGateResult<T> = Result<T, MembershipGateError>;

/// Workspace membership contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipGate: Send + Sync {
    /// Reports whether the user belongs to the workspace.
    async fn is_member(
        &self,
        user: UserId,
        workspace: WorkspaceId,
    ) -> MembershipGateResult<bool>;
}

/// Errors returned by membership gate adapters.
#[derive(Debug, Clone, Error)]
pub enum MembershipGateError {
    /// The membership collaborator could not be reached or answered badly.
    #[error("membership lookup failed: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl MembershipGateError {
    /// Wraps a collaborator failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
