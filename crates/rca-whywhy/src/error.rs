//! Error types for the Why-Why forest

use crate::id::NodeId;

/// Errors from forest edits and persistence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Referenced node does not exist (input forest is left unchanged)
    #[error("node not found: {0}")]
    NotFound(NodeId),

    /// Tree is deeper than the recursion guard allows
    #[error("tree depth exceeds limit of {limit} levels")]
    DepthExceeded { limit: usize },

    /// Same id appears twice
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// Record names a parent that was never seen
    #[error("record {id} references unknown parent {parent}")]
    OrphanRecord { id: NodeId, parent: NodeId },

    /// Record breaks pre-order or depth bookkeeping
    #[error("malformed record {id}: {reason}")]
    MalformedRecord { id: NodeId, reason: String },

    /// Chain template has no statements
    #[error("chain template is empty")]
    EmptyChain,
}

impl TreeError {
    /// Check if error is the common, non-fatal missing-node case
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Create malformed record error
    pub fn malformed(id: NodeId, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            id,
            reason: reason.into(),
        }
    }
}
