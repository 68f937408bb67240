//! Combined root-cause state
//!
//! The checklist, forest and SCAT grid travel together as one immutable
//! value. Checklist toggles go through [`crate::SyncEngine`]; the manual
//! edits below replace a single part and leave the others as they were.
//!
//! Tree edits here only enforce the hard depth guard. With a lower
//! configured `max_depth`, insert branches and chains through
//! [`crate::SyncEngine::insert_child`] and
//! [`crate::SyncEngine::insert_chain`].

use crate::error::SyncResult;
use rca_checklist::{Category, RootCauseAnalysis};
use rca_scat::{ScatAnalysis, ScatBlock, ScatField};
use rca_whywhy::{Forest, NodeEntry, NodeId};
use serde::{Deserialize, Serialize};

/// Checklist, Why-Why forest and SCAT grid of one incident report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncState {
    pub root_cause: RootCauseAnalysis,
    pub forest: Forest,
    pub scat: ScatAnalysis,
}

impl SyncState {
    /// Empty state for a new incident report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Depth-first forest listing for rendering
    #[inline]
    #[must_use]
    pub fn tree_listing(&self) -> Vec<NodeEntry<'_>> {
        self.forest.walk()
    }

    /// Lines of one SCAT column for rendering
    #[inline]
    #[must_use]
    pub fn block_lines(&self, field: ScatField) -> &[String] {
        self.scat.block(field).lines()
    }

    /// Add a manual branch under `parent`
    ///
    /// # Errors
    /// Returns `Tree(NotFound)` if `parent` is gone, or `Tree(DepthExceeded)`
    pub fn insert_child(&self, parent: NodeId, text: impl Into<String>) -> SyncResult<(Self, NodeId)> {
        let (forest, id) = self.forest.insert_child(parent, text)?;
        Ok((self.with_forest(forest), id))
    }

    /// Add a manual root (e.g. a cause the checklist does not offer)
    #[must_use]
    pub fn insert_root(&self, text: impl Into<String>) -> (Self, NodeId) {
        let (forest, id) = self.forest.insert_root(text);
        (self.with_forest(forest), id)
    }

    /// Edit a node's text
    ///
    /// # Errors
    /// Returns `Tree(NotFound)` if `id` is gone
    pub fn update_text(&self, id: NodeId, text: impl Into<String>) -> SyncResult<Self> {
        Ok(self.with_forest(self.forest.update_text(id, text)?))
    }

    /// Delete a node and its subtree
    ///
    /// # Errors
    /// Returns `Tree(NotFound)` if `id` is gone
    pub fn remove_node(&self, id: NodeId) -> SyncResult<Self> {
        Ok(self.with_forest(self.forest.remove_node(id)?))
    }

    /// Load a template chain as a new root or under `parent`
    ///
    /// # Errors
    /// Returns `Tree(EmptyChain)`, `Tree(NotFound)` or `Tree(DepthExceeded)`
    pub fn insert_chain<S: AsRef<str>>(
        &self,
        parent: Option<NodeId>,
        statements: &[S],
    ) -> SyncResult<(Self, NodeId)> {
        let (forest, id) = self.forest.insert_chain(parent, statements)?;
        Ok((self.with_forest(forest), id))
    }

    /// Replace a SCAT column with operator-edited text
    #[must_use]
    pub fn with_scat_text(&self, field: ScatField, text: &str) -> Self {
        Self {
            root_cause: self.root_cause.clone(),
            forest: self.forest.clone(),
            scat: self.scat.with_block(field, ScatBlock::from_text(text)),
        }
    }

    /// Replace the "Other" elaboration text of a category
    #[must_use]
    pub fn with_other_detail(&self, category: Category, detail: impl Into<String>) -> Self {
        Self {
            root_cause: self.root_cause.with_other_detail(category, detail),
            forest: self.forest.clone(),
            scat: self.scat.clone(),
        }
    }

    fn with_forest(&self, forest: Forest) -> Self {
        Self {
            root_cause: self.root_cause.clone(),
            forest,
            scat: self.scat.clone(),
        }
    }
}
