//! Why-node type

use crate::id::NodeId;
use serde::{Deserialize, Serialize};

/// A node in the causal forest
///
/// Children are owned exclusively by their parent; there is no sharing and
/// no cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyNode {
    /// Stable identifier
    pub id: NodeId,

    /// Cause statement (may be empty while being authored)
    pub text: String,

    /// Ordered sub-causes
    #[serde(default)]
    pub children: Vec<WhyNode>,
}

impl WhyNode {
    /// Create leaf node with a fresh id
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Same node with replaced text
    #[inline]
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            id: self.id,
            text: text.into(),
            children: self.children.clone(),
        }
    }

    /// Same node with one more child appended
    #[inline]
    #[must_use]
    pub fn with_child(&self, child: WhyNode) -> Self {
        let mut children = Vec::with_capacity(self.children.len() + 1);
        children.extend_from_slice(&self.children);
        children.push(child);
        Self {
            id: self.id,
            text: self.text.clone(),
            children,
        }
    }

    /// Check if node has no children
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Levels in this subtree, including self
    pub(crate) fn subtree_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}
