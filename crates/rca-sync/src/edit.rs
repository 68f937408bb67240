//! Manual Why-Why edits under the configured depth limit
//!
//! [`SyncState`] edits only know the hard [`MAX_DEPTH`] guard. Hosts that
//! lower `max_depth` route branch and template insertion through the engine
//! so a later toggle never meets a forest it refuses.

use crate::engine::SyncEngine;
use crate::error::SyncResult;
use crate::state::SyncState;
use rca_whywhy::{NodeId, TreeError, MAX_DEPTH};

impl SyncEngine {
    /// Add a manual branch under `parent`
    ///
    /// # Errors
    /// - `Tree(NotFound)` if `parent` is gone
    /// - `Tree(DepthExceeded)` if the child would sit at the configured limit
    pub fn insert_child(
        &self,
        state: &SyncState,
        parent: NodeId,
        text: impl Into<String>,
    ) -> SyncResult<(SyncState, NodeId)> {
        self.check_room(state, Some(parent), 1)?;
        state.insert_child(parent, text)
    }

    /// Load a template chain as a new root or under `parent`
    ///
    /// # Errors
    /// - `Tree(EmptyChain)` if `statements` is empty
    /// - `Tree(NotFound)` if `parent` is given but gone
    /// - `Tree(DepthExceeded)` if the chain would reach the configured limit
    pub fn insert_chain<S: AsRef<str>>(
        &self,
        state: &SyncState,
        parent: Option<NodeId>,
        statements: &[S],
    ) -> SyncResult<(SyncState, NodeId)> {
        self.check_room(state, parent, statements.len())?;
        state.insert_chain(parent, statements)
    }

    /// Refuse `levels` new levels below `parent` (or as a root chain) if the
    /// deepest would sit at the limit
    fn check_room(
        &self,
        state: &SyncState,
        parent: Option<NodeId>,
        levels: usize,
    ) -> SyncResult<()> {
        let limit = self.config().max_depth.min(MAX_DEPTH);
        let deepest = match parent {
            Some(parent) => {
                let depth = state.forest.depth_of(parent).ok_or(TreeError::NotFound(parent))?;
                depth + levels
            }
            None => levels.saturating_sub(1),
        };
        if deepest >= limit {
            return Err(TreeError::DepthExceeded { limit }.into());
        }
        Ok(())
    }
}
